mod args;
mod cmd;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut p = lexopt::Parser::from_env();
    cmd::run(&mut p)
}
