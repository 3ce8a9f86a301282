use clap::Parser;
use env_logger::Env;
use std::time::Duration;
use xsp::{Conf, XspErr, DEFAULT_READ_TIMEOUT};

#[derive(Debug, Parser)]
#[command(bin_name = "xsp")]
#[command(about = "Query Xonotic servers for their status, exits with 1 if any query fails")]
#[command(version)]
#[command(arg_required_else_help(true))]
struct CLIArg {
    /// Servers to query, as `host` or `host:port`.
    #[arg(required = true)]
    servers: Vec<String>,

    /// Port used for servers given without one.
    #[arg(long, short = 'p', default_value_t = xsp::DEFAULT_PORT)]
    port: u16,

    /// Time to wait for each response, in milliseconds.
    #[arg(long, short = 't', default_value_t = DEFAULT_READ_TIMEOUT.as_millis() as u64)]
    timeout_ms: u64,

    /// Keep color codes in player nicks.
    #[arg(long)]
    keep_colors: bool,
}

impl CLIArg {
    fn conf_for(&self, server: &str) -> Result<Conf, XspErr> {
        let mut conf = match server.contains(':') {
            true => Conf::create_from_str(server)?,
            false => Conf::create_with_port(server, self.port),
        };

        conf.filter_colors = !self.keep_colors;
        conf.socket_conf.read_time_out = Some(Duration::from_millis(self.timeout_ms));

        Ok(conf)
    }
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli_arg = CLIArg::parse();
    let mut failures = 0;

    for server in &cli_arg.servers {
        match cli_arg.conf_for(server).and_then(|conf| conf.get_status()) {
            Ok(status) => println!("{}", status),
            Err(err) => {
                println!("Error: {}", err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
