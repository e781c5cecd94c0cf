pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed configuration constants for the dashboard shell,
    //! organized by functional area for clarity.

    // =============================================================================
    // SHELL CONFIGURATION
    // =============================================================================

    /// The maximum number of shell events to keep for the footer status line.
    pub const MAX_STATUS_EVENTS: usize = 50;

    /// How long the UI loop waits for terminal input before redrawing (milliseconds).
    pub const INPUT_POLL_INTERVAL_MS: u64 = 100;

    /// Directory under the user's home that holds the configuration file.
    pub const CONFIG_DIR: &str = ".support-center";

    /// Name of the configuration file inside [`CONFIG_DIR`].
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // HOST DOCUMENT
    // =============================================================================

    /// Marker id of the font stylesheet link registered on first mount.
    pub const FONT_LINK_ID: &str = "imf-font";

    /// Default font stylesheet registered with the host document.
    pub const FONT_STYLESHEET_URL: &str =
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

    // =============================================================================
    // PANEL RENDERING
    // =============================================================================

    /// Divisor used to scale "most asked" counts into bar widths.
    /// Matches the first entry of the fixed list, not the computed maximum.
    pub const TOP_ASKED_REFERENCE_MAX: u32 = 127;

    /// Number of star slots shown for a feedback rating.
    pub const STAR_SLOTS: u8 = 5;

    /// Headless snapshot rendering defaults
    pub mod snapshot {
        /// Default terminal width for `snapshot` (columns)
        pub const DEFAULT_WIDTH: u16 = 160;
        /// Default terminal height for `snapshot` (rows)
        pub const DEFAULT_HEIGHT: u16 = 56;
    }
}
