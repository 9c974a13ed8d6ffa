use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendName;

pub enum RunMode {
    Serve,
    Client,
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn arg_host() -> Arg {
    return Arg::new(ConfigKey::Host.to_string())
        .long(ConfigKey::Host.to_string())
        .env("CONFAB_HOST")
        .num_args(1)
        .help(format!(
            "The address to listen on, or to connect to in client mode. [default: {}]",
            Config::default(ConfigKey::Host)
        ))
        .global(true);
}

fn arg_port() -> Arg {
    return Arg::new(ConfigKey::Port.to_string())
        .short('p')
        .long(ConfigKey::Port.to_string())
        .env("CONFAB_PORT")
        .num_args(1)
        .help(format!(
            "The port to listen on, or to connect to in client mode. [default: {}]",
            Config::default(ConfigKey::Port)
        ))
        .global(true);
}

fn arg_backend() -> Arg {
    return Arg::new(ConfigKey::Backend.to_string())
        .short('b')
        .long(ConfigKey::Backend.to_string())
        .env("CONFAB_BACKEND")
        .num_args(1)
        .help(format!(
            "The backend hosting the models to relay conversations to. [default: {}]",
            Config::default(ConfigKey::Backend)
        ))
        .value_parser(PossibleValuesParser::new(BackendName::VARIANTS))
        .global(true);
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("CONFAB_MODEL")
        .num_args(1)
        .help(format!(
            "The model every session starts with. Must be part of --models. [default: {}]",
            Config::default(ConfigKey::Model)
        ))
        .global(true);
}

fn arg_models() -> Arg {
    return Arg::new(ConfigKey::Models.to_string())
        .long(ConfigKey::Models.to_string())
        .env("CONFAB_MODELS")
        .num_args(1)
        .help(format!(
            "Comma separated allow-list of models clients may select with /model. [default: {}]",
            Config::default(ConfigKey::Models)
        ))
        .global(true);
}

fn arg_history_limit() -> Arg {
    return Arg::new(ConfigKey::HistoryLimit.to_string())
        .long(ConfigKey::HistoryLimit.to_string())
        .env("CONFAB_HISTORY_LIMIT")
        .num_args(1)
        .help(format!(
            "How many user/assistant turns are retained per session beyond the system message. [default: {}]",
            Config::default(ConfigKey::HistoryLimit)
        ))
        .global(true);
}

fn arg_system_prompt() -> Arg {
    return Arg::new(ConfigKey::SystemPrompt.to_string())
        .long(ConfigKey::SystemPrompt.to_string())
        .env("CONFAB_SYSTEM_PROMPT")
        .num_args(1)
        .help("The system message every conversation starts with.")
        .global(true);
}

fn arg_backend_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
        .long(ConfigKey::BackendHealthCheckTimeout.to_string())
        .env("CONFAB_BACKEND_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds before timing out the backend healthcheck at startup. [default: {}]",
            Config::default(ConfigKey::BackendHealthCheckTimeout)
        ))
        .global(true);
}

fn arg_ollama_url() -> Arg {
    return Arg::new(ConfigKey::OllamaURL.to_string())
        .long(ConfigKey::OllamaURL.to_string())
        .env("CONFAB_OLLAMA_URL")
        .num_args(1)
        .help(format!(
            "Ollama API URL when using the Ollama backend. [default: {}]",
            Config::default(ConfigKey::OllamaURL)
        ))
        .global(true);
}

fn arg_openai_url() -> Arg {
    return Arg::new(ConfigKey::OpenAiURL.to_string())
        .long(ConfigKey::OpenAiURL.to_string())
        .env("CONFAB_OPENAI_URL")
        .num_args(1)
        .help(format!(
            "OpenAI API URL when using the OpenAI backend. Can be swapped to a compatible proxy. [default: {}]",
            Config::default(ConfigKey::OpenAiURL)
        ))
        .global(true);
}

fn arg_openai_token() -> Arg {
    return Arg::new(ConfigKey::OpenAiToken.to_string())
        .long(ConfigKey::OpenAiToken.to_string())
        .env("CONFAB_OPENAI_TOKEN")
        .num_args(1)
        .help("OpenAI API token when using the OpenAI backend.")
        .global(true);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

pub fn build() -> Command {
    return Command::new("confab")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(Command::new("serve").about("Start the chat server. This is the default when no subcommand is passed."))
        .subcommand(Command::new("client").about("Start an interactive terminal client against a running server."))
        .subcommand(subcommand_completions())
        .arg(arg_host())
        .arg(arg_port())
        .arg(arg_backend())
        .arg(arg_model())
        .arg(arg_models())
        .arg(arg_history_limit())
        .arg(arg_system_prompt())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_ollama_url())
        .arg(arg_openai_url())
        .arg(arg_openai_token());
}

pub fn parse() -> Result<Option<RunMode>> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("client", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]);
            return Ok(Some(RunMode::Client));
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(None);
        }
        Some(("serve", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]);
            return Ok(Some(RunMode::Serve));
        }
        _ => {
            Config::load(vec![&matches]);
            return Ok(Some(RunMode::Serve));
        }
    }
}
