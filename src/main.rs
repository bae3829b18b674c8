// SPDX-License-Identifier: MPL-2.0
use iced_menagerie::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("iced_menagerie=info".parse().unwrap()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        seed: args.opt_value_from_str("--seed").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
