//! Tests for caller-supplied templates and `clap`-derived trees.

use camino::Utf8PathBuf;
use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Arg, ArgAction};
use cmdman::clock::FixedClock;
use cmdman::config::ManConfig;
use cmdman::error::ManError;
use cmdman::tree::Command;
use cmdman::{generate_man_pages_with_clock, render_man_page};
use rstest::{fixture, rstest};
use std::error::Error;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

const MDOC_TEMPLATE: &str = r#".Dd {{ center_footer }}
.Dt {{ command_path | upper }} {{ section }}
.Sh NAME
.Nm {{ command_path }}
.Nd {{ short_description | simple_to_mdoc }}
.Sh DESCRIPTION
{{ description | simple_to_mdoc }}
"#;

#[fixture]
fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .single()
            .expect("valid instant"),
    )
}

fn utf8_dir(temp: &TempDir) -> Result<Utf8PathBuf, Box<dyn Error>> {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .map_err(|path| format!("non-UTF-8 temp dir: {}", path.display()).into())
}

#[rstest]
fn custom_mdoc_template_replaces_builtin() -> TestResult {
    let command = Command::new("app")
        .short("Run the app.")
        .long("First paragraph.\n\n\n   Second -paragraph.");
    let config = ManConfig {
        template: Some(MDOC_TEMPLATE.to_owned()),
        date: NaiveDate::from_ymd_opt(2025, 6, 30),
        ..ManConfig::new("/unused")
    };

    let page = render_man_page(&command, &config)?;

    assert_eq!(
        page.trim_end(),
        ".Dd Jun 2025\n.Dt APP 1\n.Sh NAME\n.Nm app\n.Nd Run the app.\n.Sh DESCRIPTION\n\
         First paragraph.\n.Pp\nSecond \\-paragraph."
    );
    Ok(())
}

#[rstest]
fn unknown_template_variable_fails_render(clock: FixedClock) -> TestResult {
    let temp = TempDir::new()?;
    let config = ManConfig {
        template: Some("{{ no_such_field }}".to_owned()),
        ..ManConfig::new(utf8_dir(&temp)?)
    };

    let err = generate_man_pages_with_clock(&Command::new("app"), &config, &clock)
        .expect_err("undefined variable");

    assert!(matches!(err, ManError::TemplateRender { ref command, .. } if command == "app"));
    assert!(err.source().is_some());
    assert!(!temp.path().join("app.1").exists());
    Ok(())
}

#[rstest]
fn malformed_template_fails_before_any_page(clock: FixedClock) -> TestResult {
    let temp = TempDir::new()?;
    let config = ManConfig {
        template: Some("{% for %}".to_owned()),
        ..ManConfig::new(utf8_dir(&temp)?)
    };
    let tree = Command::new("app").subcommand(Command::new("sub"));

    let err = generate_man_pages_with_clock(&tree, &config, &clock).expect_err("parse error");

    assert!(matches!(err, ManError::TemplateParse { .. }));
    assert_eq!(std::fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}

#[rstest]
fn clap_commands_generate_pages(clock: FixedClock) -> TestResult {
    let temp = TempDir::new()?;
    let out_dir = utf8_dir(&temp)?;
    let cli = clap::Command::new("tool")
        .about("A tool.")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log more."),
        )
        .subcommand(
            clap::Command::new("serve").about("Serve requests.").arg(
                Arg::new("port")
                    .long("port")
                    .value_name("PORT")
                    .help("Port to bind."),
            ),
        )
        .subcommand(clap::Command::new("debug").hide(true));

    let tree = Command::from(&cli);
    let output = generate_man_pages_with_clock(&tree, &ManConfig::new(out_dir.clone()), &clock)?;

    assert_eq!(
        output.files,
        [out_dir.join("tool-serve.1"), out_dir.join("tool.1")]
    );
    let serve = std::fs::read_to_string(out_dir.join("tool-serve.1"))?;
    assert!(serve.contains("\\fB\\-\\-port\\fP=\\fIPORT\\fP\nPort to bind.\n"));
    assert!(serve.contains(
        ".SH OPTIONS INHERITED FROM PARENT COMMANDS\n.TP\n\\fB\\-v\\fP, \\fB\\-\\-verbose\\fP[=\\fItrue\\fP]\nLog more.\n"
    ));
    assert!(serve.contains("This command does not accept positional arguments."));
    Ok(())
}
