//! Configuration defaults and predefined name tables for the CLI.

/// Default time format name
pub const DEFAULT_TIME_FORMAT: &str = "RFC3339";

/// Default color scale name
pub const DEFAULT_SCALE: &str = "BlueToRed";

/// Default lower bound for the color scale (deltas at or below this are "fast")
pub const DEFAULT_SCALE_FAST: &str = "100ms";

/// Default upper bound for the color scale (deltas at or above this are "slow")
pub const DEFAULT_SCALE_SLOW: &str = "2s";

/// Terminal escape that resets colors
pub const COLOR_RESET: &str = "\x1b[0;00m";

// Named time formats, expressed as strftime strings
pub const TIME_FORMATS: &[(&str, &str)] = &[
    ("ANSIC", "%a %b %e %H:%M:%S %Y"),
    ("UnixDate", "%a %b %e %H:%M:%S %Z %Y"),
    ("RubyDate", "%a %b %d %H:%M:%S %z %Y"),
    ("RFC822", "%d %b %y %H:%M %Z"),
    ("RFC822Z", "%d %b %y %H:%M %z"),
    ("RFC850", "%A, %d-%b-%y %H:%M:%S %Z"),
    ("RFC1123", "%a, %d %b %Y %H:%M:%S %Z"),
    ("RFC1123Z", "%a, %d %b %Y %H:%M:%S %z"),
    ("RFC3339", "%Y-%m-%dT%H:%M:%S%:z"),
    ("RFC3339Nano", "%Y-%m-%dT%H:%M:%S%.f%:z"),
    ("Kitchen", "%-I:%M%p"),
    ("Stamp", "%b %e %H:%M:%S"),
    ("StampMilli", "%b %e %H:%M:%S%.3f"),
    ("StampMicro", "%b %e %H:%M:%S%.6f"),
    ("StampNano", "%b %e %H:%M:%S%.9f"),
];

// Named output templates (Tera syntax)
pub const TEMPLATES: &[(&str, &str)] = &[
    ("Time", "{{ time }} {{ text }}"),
    ("TimeDelta", "{{ time }} +{{ delta }} {{ text }}"),
    ("TimeDeltaNanos", "{{ time }} +{{ deltaNanos }} {{ text }}"),
    ("TimeTotal", "{{ time }} {{ total }} {{ text }}"),
    ("Delta", "{{ delta }} {{ text }}"),
    ("DeltaNanos", "{{ deltaNanos }} {{ text }}"),
    ("ColorText", "{{ color(nanos=deltaNanos) }}{{ text }}{{ reset() }}"),
    ("Color", "{{ color(nanos=deltaNanos) }}█{{ reset() }} {{ text }}"),
    ("TimeColor", "{{ color(nanos=deltaNanos) }}{{ time }}{{ reset() }} {{ text }}"),
];

// Named color scales (colors go from fast to slow)
pub const COLOR_SCALES: &[(&str, &str)] = &[
    ("GreenToRed", "#0F0 -> #F00"),
    ("BlueToRed", "#00F -> #F00"),
    ("CyanToRed", "#0FF -> #F00"),
    ("WhiteToRed", "#FFF -> #F00"),
    ("WhiteToPurple", "#FFF -> #F700FF"),
    ("BlackToRed", "#000 -> #F00"),
    ("BlackToPurple", "#000 -> #F700FF"),
    ("WhiteToBlueToRed", "#FFF -> #00F -> #F00"),
];

/// Resolve a predefined name against a table, falling back to the literal value
///
/// **Public** - used when building settings from CLI args
pub fn resolve<'a>(table: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, resolved)| *resolved)
        .unwrap_or(value)
}
