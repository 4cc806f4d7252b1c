use hello_window::config::AppConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    match hello_window::run(&config) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
