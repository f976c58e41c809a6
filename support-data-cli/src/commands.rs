use std::io::Write;

use anyhow::{bail, Context, Result};
use slog::Logger;
use support_data::{BufferSurface, DisplaySurface, SupportPanel};

use crate::{
    args::{Cli, Commands, SnapshotArgs},
    config::Config,
    host::FileHost,
};

type Panel = SupportPanel<FileHost, BufferSurface>;

pub fn run(cli: Cli, log: &Logger, out: &mut impl Write) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_links(cli.links);

    match cli.command {
        Commands::Show { input } => {
            let panel = open_panel(&config, &input, log)?;
            out.write_all(panel.surface().value().as_bytes())?;
        }
        Commands::Report { input, id } => {
            let panel = open_panel(&config, &input, log)?;
            let ids: Vec<&str> = match &id {
                Some(id) => vec![id.as_str()],
                None => config.report_links.iter().map(String::as_str).collect(),
            };
            for id in ids {
                let Some(url) = panel.link(id) else {
                    bail!("no link configured for {id:?}");
                };
                writeln!(out, "{id}\t{url}")?;
            }
        }
        Commands::Open { input, id } => {
            let mut panel = open_panel(&config, &input, log)?;
            if !panel.activate_link(&id) {
                bail!("link {id:?} has no URL");
            }
            for url in panel.messaging().opened() {
                writeln!(out, "{url}")?;
            }
        }
    }
    Ok(())
}

fn open_panel(config: &Config, input: &SnapshotArgs, log: &Logger) -> Result<Panel> {
    let host = FileHost::new(input.snapshot.clone(), log.clone());
    let mut panel = SupportPanel::new(host, BufferSurface::new(), config.profile.clone())
        .with_logger(log.clone())
        .with_report_links(config.report_links.iter().cloned());
    for (id, url) in &config.links {
        panel = panel.with_link(id.clone(), url.clone());
    }

    panel
        .load()
        .with_context(|| format!("failed to load {}", input.snapshot.display()))?;
    if input.redact {
        panel.redact();
    }
    Ok(panel)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use slog::{o, Discard, Logger};
    use support_data::report::wrap_details;
    use url::Url;

    use super::run;
    use crate::args::Cli;

    fn snapshot_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"filterset": ["a", "b"], "listset": {{"added": {{"file:///l.txt": 1}}}}}}"#
        )
        .unwrap();
        file
    }

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli, &Logger::root(Discard, o!()), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn show_prints_rendered_text() {
        let file = snapshot_file();
        let path = file.path().to_str().unwrap();

        let plain = run_args(&["support-data", "show", "-s", path]).unwrap();
        assert_eq!(plain, "filterset:\n  a\n  b\nlistset:\n  added:\n    file:///l.txt: 1\n");

        let redacted = run_args(&["support-data", "show", "-s", path, "--redact"]).unwrap();
        assert_eq!(
            redacted,
            "filterset: [array of 2 redacted]\nlistset:\n  added:\n    [list name 1 redacted]: 1\n"
        );
    }

    #[test]
    fn report_prints_link_with_embedded_text() {
        let file = snapshot_file();
        let path = file.path().to_str().unwrap();

        let output = run_args(&[
            "support-data",
            "report",
            "-s",
            path,
            "--redact",
            "--link",
            "bugReport=https://issues.example/new",
            "--id",
            "bugReport",
        ])
        .unwrap();

        let (id, url) = output.trim_end().split_once('\t').unwrap();
        assert_eq!(id, "bugReport");
        let url = Url::parse(url).unwrap();
        let configuration = url
            .query_pairs()
            .find(|(key, _)| key == "configuration")
            .map(|(_, value)| value.into_owned());
        assert_eq!(
            configuration,
            Some(wrap_details(
                "filterset: [array of 2 redacted]\nlistset:\n  added:\n    [list name 1 redacted]: 1\n"
            ))
        );
    }

    #[test]
    fn report_without_links_fails() {
        let file = snapshot_file();
        let path = file.path().to_str().unwrap();
        let err = run_args(&["support-data", "report", "-s", path]).unwrap_err();
        assert!(err.to_string().contains("no link configured"));
    }

    #[test]
    fn open_prints_navigation_target() {
        let file = snapshot_file();
        let path = file.path().to_str().unwrap();
        let output = run_args(&[
            "support-data",
            "open",
            "-s",
            path,
            "--link",
            "wiki=https://wiki.example/",
            "wiki",
        ])
        .unwrap();
        assert_eq!(output, "https://wiki.example/\n");
    }

    #[test]
    fn open_unknown_link_fails() {
        let file = snapshot_file();
        let path = file.path().to_str().unwrap();
        assert!(run_args(&["support-data", "open", "-s", path, "nowhere"]).is_err());
    }
}
