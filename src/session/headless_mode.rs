//! Headless snapshot rendering

use crate::commands::NoopCommandHandler;
use crate::config::Config;
use crate::dataset::{DataSource, data_source};
use crate::ui::dashboard::{Tab, buffer_lines, render_dashboard};
use crate::ui::{App, UIConfig};
use ratatui::{Terminal, backend::TestBackend};
use std::error::Error;

/// What a snapshot should show.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotOptions {
    pub width: u16,
    pub height: u16,
    /// Tab to select before drawing; the dashboard tab when absent.
    pub tab: Option<Tab>,
    pub menu_open: bool,
}

/// Renders one frame of the dashboard off-screen and returns it as text.
pub fn render_snapshot(
    config: &Config,
    source: &dyn DataSource,
    options: SnapshotOptions,
) -> Result<String, Box<dyn Error>> {
    if options.width == 0 || options.height == 0 {
        return Err(Box::from("snapshot width and height must be greater than zero"));
    }

    let ui_config = UIConfig::new(false, config.show_assistant_panel);
    let mut app = App::new(
        source,
        ui_config,
        &config.font_stylesheet_url,
        Box::new(NoopCommandHandler),
    );
    if let Some(tab) = options.tab {
        app.state_mut().select_tab(tab);
    }
    if options.menu_open {
        app.state_mut().toggle_menu();
    }

    let backend = TestBackend::new(options.width, options.height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| render_dashboard(f, app.state()))?;

    let mut lines = buffer_lines(terminal.backend().buffer());

    // Shell events that pass the RUST_LOG threshold follow the frame
    for event in app.state().status_log.iter().filter(|e| e.should_display()) {
        lines.push(event.to_string());
    }
    Ok(lines.join("\n"))
}

/// Prints a snapshot of the configured dashboard data to stdout.
pub fn run_snapshot(config: &Config, options: SnapshotOptions) -> Result<(), Box<dyn Error>> {
    let source = data_source(config.data_file.as_deref());
    let snapshot = render_snapshot(config, source.as_ref(), options)?;
    println!("{}", snapshot);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::snapshot::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use crate::dataset::{DataError, Dataset, FixedDataSource};

    struct OfflineSource;

    impl DataSource for OfflineSource {
        fn load(&self) -> Result<Dataset, DataError> {
            Err(DataError::Unavailable("offline".to_string()))
        }
    }

    fn options() -> SnapshotOptions {
        SnapshotOptions {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tab: None,
            menu_open: false,
        }
    }

    #[test]
    fn snapshot_shows_dashboard_panels() {
        let text = render_snapshot(&Config::default(), &FixedDataSource, options()).unwrap();
        assert!(text.contains("Questions Requiring Your Attention"));
        assert!(text.contains("Most Asked Questions This Week"));
        assert!(!text.contains("Sign Out"));
    }

    #[test]
    fn snapshot_with_menu_open_shows_dropdown() {
        let mut opts = options();
        opts.menu_open = true;
        opts.tab = Some(Tab::Analytics);
        let text = render_snapshot(&Config::default(), &FixedDataSource, opts).unwrap();
        assert!(text.contains("Sign Out"));
        assert!(text.contains("Questions Requiring Your Attention"));
    }

    #[test]
    fn snapshot_hides_assistant_when_configured() {
        let config = Config {
            show_assistant_panel: false,
            ..Config::default()
        };
        let text = render_snapshot(&config, &FixedDataSource, options()).unwrap();
        assert!(!text.contains("AI Copilot"));
    }

    #[test]
    fn snapshot_of_offline_source_shows_notice() {
        let text = render_snapshot(&Config::default(), &OfflineSource, options()).unwrap();
        assert!(text.contains("Dashboard data could not be loaded."));
    }

    #[test]
    fn zero_sized_snapshot_is_rejected() {
        let mut opts = options();
        opts.width = 0;
        assert!(render_snapshot(&Config::default(), &FixedDataSource, opts).is_err());
    }
}
