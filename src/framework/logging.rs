use tracing_subscriber::{
    filter::ParseError, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    EnvFilter,
};

#[allow(unused_imports)]
use tracing::{instrument, trace, warn};

pub const DEFAULT_FILTER: &str = "hangman=warn";

/// A filter that didn't parse, and where it came from.
#[derive(Debug)]
struct Rejected {
    origin: &'static str,
    directives: String,
    err: ParseError,
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so they stay
/// out of the game's own output.
#[instrument]
pub fn init_tracing(configured: Option<&str>) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = pick_filter(from_env.as_deref(), configured);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    for Rejected {
        origin,
        directives,
        err,
    } in rejected
    {
        warn!(origin, directives = %directives, %err, "invalid log filter, ignoring it");
    }

    trace!("finished");
}

/// First filter that parses out of `RUST_LOG`, the config and the default.
fn pick_filter(from_env: Option<&str>, configured: Option<&str>) -> (EnvFilter, Vec<Rejected>) {
    let mut rejected = Vec::new();

    let candidates = [
        (EnvFilter::DEFAULT_ENV, from_env),
        ("config", configured),
    ];

    for (origin, directives) in candidates {
        let Some(directives) = directives else {
            continue;
        };

        match EnvFilter::try_new(directives) {
            Ok(filter) => return (filter, rejected),
            Err(err) => rejected.push(Rejected {
                origin,
                directives: directives.to_owned(),
                err,
            }),
        }
    }

    (EnvFilter::new(DEFAULT_FILTER), rejected)
}
