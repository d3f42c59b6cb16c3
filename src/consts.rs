//! Compile-time constants for configuration

/// The default mountpoint of the application. The app is started at the html tag with this
/// id unless the host page passes a different `mountpoint`.
pub const MOUNTPOINT: &str = "app";

pub const TITLE_BASE: &str = "FF MAX Tournament";

/// Default height of the fixed page header in pixels.
pub const HEADER_OFFSET: f64 = 100.0;

/// The sections of the page in document order, as `(id, label)` pairs. The id is also the
/// `id` attribute of the section anchor.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("overview", "Overview"),
    ("format", "Format"),
    ("timeline", "Timeline"),
    ("prizes", "Prizes"),
    ("rules", "Rules"),
];
