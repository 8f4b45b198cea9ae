use std::io;

use chessington::Session;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    chessington::print_engine_info();
    chessington::print_binary_info();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Session::new(&mut input, &mut output).run()
}
