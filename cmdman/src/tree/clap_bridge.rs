//! Conversion from `clap` command definitions.
//!
//! Hidden subcommands become hidden commands, global arguments become
//! persistent flags and a command without positional arguments rejects
//! them.

use clap::{Arg, ArgAction};

use super::{ARG_HINTS_ANNOTATION, ArgumentPolicy, Command, Flag};

impl From<&clap::Command> for Command {
    fn from(cmd: &clap::Command) -> Self {
        let positionals: Vec<&Arg> = cmd.get_positionals().collect();
        let args = if positionals.is_empty() {
            ArgumentPolicy::None
        } else {
            ArgumentPolicy::Any
        };
        let usage = positionals
            .iter()
            .map(|arg| positional_usage(arg))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name: cmd.get_name().to_owned(),
            usage: (!usage.is_empty()).then_some(usage),
            short: cmd.get_about().map(ToString::to_string).unwrap_or_default(),
            long: cmd
                .get_long_about()
                .map(ToString::to_string)
                .unwrap_or_default(),
            args,
            hidden: cmd.is_hide_set(),
            flags: cmd
                .get_arguments()
                .filter(|arg| !arg.is_positional())
                .map(Flag::from)
                .collect(),
            subcommands: cmd.get_subcommands().map(Self::from).collect(),
            ..Self::default()
        }
    }
}

impl From<&Arg> for Flag {
    fn from(arg: &Arg) -> Self {
        let action = arg.get_action();
        let no_opt_default_value = match action {
            ArgAction::SetFalse => "false",
            _ if !action.takes_values() => "true",
            _ => "",
        };
        let default_value = arg
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy())
            .collect::<Vec<_>>()
            .join(",");

        let mut flag = Self {
            name: arg
                .get_long()
                .map_or_else(|| arg.get_id().as_str().to_owned(), str::to_owned),
            shorthand: arg.get_short(),
            hidden: arg.is_hide_set(),
            persistent: arg.is_global_set(),
            usage: arg.get_help().map(ToString::to_string).unwrap_or_default(),
            default_value,
            no_opt_default_value: no_opt_default_value.to_owned(),
            ..Self::default()
        };
        if let Some(hint) = arg.get_value_names().and_then(|names| names.first()) {
            flag.annotations
                .insert(ARG_HINTS_ANNOTATION.to_owned(), vec![hint.to_string()]);
        }
        flag
    }
}

fn positional_usage(arg: &Arg) -> String {
    let name = arg
        .get_value_names()
        .and_then(|names| names.first())
        .map_or_else(|| arg.get_id().as_str().to_uppercase(), ToString::to_string);
    if arg.is_required_set() {
        format!("<{name}>")
    } else {
        format!("[{name}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CommandRef;
    use rstest::rstest;

    fn clap_tree() -> clap::Command {
        clap::Command::new("app")
            .about("An app.")
            .arg(
                Arg::new("verbose")
                    .long("verbose")
                    .short('v')
                    .global(true)
                    .action(ArgAction::SetTrue)
                    .help("Print more."),
            )
            .subcommand(
                clap::Command::new("get")
                    .about("Fetch a thing.")
                    .arg(Arg::new("key").required(true))
                    .arg(
                        Arg::new("output")
                            .long("output")
                            .value_name("FILE")
                            .default_value("-"),
                    ),
            )
            .subcommand(clap::Command::new("debug").hide(true))
    }

    #[rstest]
    fn converts_commands_and_policies() {
        let tree = Command::from(&clap_tree());
        assert_eq!(tree.name, "app");
        assert_eq!(tree.short, "An app.");
        assert_eq!(tree.args, ArgumentPolicy::None);

        let get = tree.subcommands.first().expect("get");
        assert_eq!(get.args, ArgumentPolicy::Any);
        assert_eq!(get.usage.as_deref(), Some("<KEY>"));

        let debug = tree.subcommands.get(1).expect("debug");
        assert!(!debug.is_available());
    }

    #[rstest]
    fn converts_flags() {
        let tree = Command::from(&clap_tree());
        let verbose = tree.flags.first().expect("verbose");
        assert!(verbose.persistent);
        assert_eq!(verbose.shorthand, Some('v'));
        assert_eq!(verbose.no_opt_default_value, "true");

        let get = tree.subcommands.first().expect("get");
        let output = get.flags.first().expect("output");
        assert_eq!(output.default_value, "-");
        assert_eq!(output.annotation_value(ARG_HINTS_ANNOTATION), Some("FILE"));
        assert!(output.no_opt_default_value.is_empty());
    }

    #[rstest]
    fn global_flags_are_inherited() {
        let tree = Command::from(&clap_tree());
        let root = CommandRef::root(&tree);
        let get = root.children().next().expect("get");
        let inherited: Vec<&str> = get
            .inherited_flags()
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(inherited, ["verbose"]);
    }
}
