//! Run command implementation.
//!
//! The run command:
//! 1. Validates the raw arguments into immutable `Settings`
//! 2. Picks the record source (lines or JSON values)
//! 3. Picks the printer (JSON lines or a template)
//! 4. Drives the controller until the input ends

use super::models::RunArgs;
use crate::color::{Curve, Palette, Scale};
use crate::controller::{Controller, RunSummary};
use crate::output::printer_for;
use crate::stream::{JsonStream, LineStream};
use crate::template::{Template, MATCH_CONDITION, MATCH_TEMPLATE, OUTPUT_TEMPLATE};
use crate::timing::{parse_duration, Clock, SystemClock, TimeFormat, Zone};
use crate::utils::config::{resolve, COLOR_SCALES, TEMPLATES, TIME_FORMATS};
use crate::utils::error::{ConfigError, StreamError};
use crate::utils::settings::Settings;
use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use std::io::{self, BufRead, BufWriter, Write};
use std::sync::Arc;

/// Validate run arguments and build the settings every component shares
///
/// **Public** - called before any input is read
///
/// # Arguments
/// * `args` - Raw command-line values
///
/// # Returns
/// Settings with every pattern, template and format compiled
///
/// # Errors
/// Any `ConfigError`: bad regex, template, time format, duration, zone, or
/// scale bounds that are not increasing
pub fn validate_args(args: &RunArgs) -> Result<Settings> {
    // Step 1: color scale and its bounds
    let mut scale = Scale::parse(resolve(COLOR_SCALES, &args.scale));
    let curves = [
        (args.scale_sqr, Curve::Square),
        (args.scale_cube, Curve::Cube),
        (args.scale_sqrt, Curve::Sqrt),
        (args.scale_cubert, Curve::Cbrt),
    ];
    for (enabled, curve) in curves {
        if enabled {
            scale = scale.with_curve(curve);
        }
    }

    let fast = parse_duration(&args.scale_fast)?;
    let slow = parse_duration(&args.scale_slow)?;
    if fast >= slow {
        return Err(ConfigError::InvalidScaleBounds {
            fast: args.scale_fast.clone(),
            slow: args.scale_slow.clone(),
        }
        .into());
    }
    let palette = Arc::new(Palette::new(scale, fast, slow));

    // Step 2: templates
    let template = args
        .template
        .as_deref()
        .map(|source| {
            Template::with_palette(
                OUTPUT_TEMPLATE,
                resolve(TEMPLATES, source),
                Arc::clone(&palette),
            )
        })
        .transpose()?;
    let match_template = args
        .match_template
        .as_deref()
        .or(args.json_template.as_deref())
        .map(|source| Template::compile(MATCH_TEMPLATE, source))
        .transpose()?;
    let match_condition = args
        .match_condition
        .as_deref()
        .map(|source| Template::compile(MATCH_CONDITION, source))
        .transpose()?;

    // Step 3: match pattern
    let match_regex = args
        .match_regex
        .as_deref()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })
        })
        .transpose()?;

    // Step 4: time rendering
    let time_format = TimeFormat::new(resolve(TIME_FORMATS, &args.time_format))?;
    let zone = Zone::parse(&args.time_zone)?;

    let settings = Settings {
        template,
        time_format,
        zone,
        read_json: args.read_json || args.json_template.is_some(),
        match_regex,
        match_template,
        match_condition,
        buffer: args.match_buffer,
        palette,
    };

    debug!(
        "settings: time format {:?}, zone {:?}, match rule {}, buffering {}",
        settings.time_format.pattern(),
        settings.zone,
        settings.match_defined(),
        settings.buffer
    );

    Ok(settings)
}

/// Stamp stdin onto stdout until the input ends
///
/// **Public** - main entry point for the run command
///
/// # Errors
/// Fails with context `input error` when stdin cannot be read or decoded.
/// Records read before the failure have already been written.
pub fn execute_run(settings: &Settings) -> Result<RunSummary> {
    info!(
        "reading {} from stdin",
        if settings.read_json { "JSON values" } else { "lines" }
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = stamp_stream(
        settings,
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        SystemClock,
    )
    .context("input error")?;

    Ok(summary)
}

/// Stamp records from any reader onto any writer
///
/// **Public** - the I/O-independent core of [`execute_run`]
pub fn stamp_stream<R, W, C>(
    settings: &Settings,
    input: R,
    output: W,
    clock: C,
) -> Result<RunSummary, StreamError>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let printer = printer_for(settings, output);
    let mut controller = Controller::new(settings, printer, clock);

    if settings.read_json {
        controller.run(&mut JsonStream::new(input))
    } else {
        controller.run(&mut LineStream::new(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::timing::ScriptedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_validate_args_defaults() {
        let settings = validate_args(&RunArgs::default()).unwrap();
        assert!(settings.template.is_none());
        assert!(!settings.match_defined());
        assert_eq!(settings.time_format.pattern(), "%Y-%m-%dT%H:%M:%S%:z");
        assert_eq!(settings.zone, Zone::Local);
    }

    #[test]
    fn test_validate_args_resolves_predefined_names() {
        let args = RunArgs {
            template: Some("Delta".to_string()),
            time_format: "Kitchen".to_string(),
            scale: "WhiteToRed".to_string(),
            ..Default::default()
        };
        let settings = validate_args(&args).unwrap();
        assert_eq!(settings.time_format.pattern(), "%-I:%M%p");
        assert_eq!(settings.palette.color_of(0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_validate_args_invalid_regex() {
        let args = RunArgs {
            match_regex: Some("(unclosed".to_string()),
            ..Default::default()
        };
        let err = validate_args(&args).unwrap_err();
        assert!(err.to_string().contains("invalid regex"));
    }

    #[test]
    fn test_validate_args_invalid_template() {
        let args = RunArgs {
            match_condition: Some("{% if %}".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_time_format() {
        let args = RunArgs {
            time_format: "%Q".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_zone() {
        let args = RunArgs {
            time_zone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_scale_bounds_must_increase() {
        let args = RunArgs {
            scale_fast: "2s".to_string(),
            scale_slow: "2s".to_string(),
            ..Default::default()
        };
        let err = validate_args(&args).unwrap_err();
        assert!(err.to_string().contains("fast < slow"));

        let args = RunArgs {
            scale_fast: "soon".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_stamp_stream_with_template() {
        let args = RunArgs {
            template: Some("{{ index }} {{ delta }} {{ text }}".to_string()),
            time_zone: "UTC".to_string(),
            ..Default::default()
        };
        let settings = validate_args(&args).unwrap();
        let clock = ScriptedClock::new([
            Utc.timestamp_opt(100, 0).unwrap(),
            Utc.timestamp_opt(102, 0).unwrap(),
        ]);

        let mut out = Vec::new();
        let summary = stamp_stream(&settings, "a\nb\n".as_bytes(), &mut out, clock).unwrap();

        assert_eq!(summary.emitted, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "0 0s a\n1 2s b\n");
    }

    #[test]
    fn test_stamp_stream_reports_decode_error() {
        let settings = RunArgs {
            read_json: true,
            ..Default::default()
        };
        let settings = validate_args(&settings).unwrap();

        let mut out = Vec::new();
        let result = stamp_stream(
            &settings,
            "{\"a\":1} {oops".as_bytes(),
            &mut out,
            ScriptedClock::new([Utc.timestamp_opt(0, 0).unwrap()]),
        );

        assert!(matches!(result, Err(StreamError::Json(_))));
        // The value decoded before the failure was still written
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_stamp_stream_with_extreme_scale_bounds() {
        let args = RunArgs {
            template: Some("ColorText".to_string()),
            scale_fast: "-2000000h".to_string(),
            scale_slow: "2000000h".to_string(),
            ..Default::default()
        };
        let settings = validate_args(&args).unwrap();

        let mut out = Vec::new();
        let clock = ScriptedClock::new([Utc.timestamp_opt(0, 0).unwrap()]);
        stamp_stream(&settings, "a\n".as_bytes(), &mut out, clock).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[38;5;90ma\x1b[0;00m\n");
    }

    #[test]
    fn test_json_template_reads_json_values() {
        let args = RunArgs {
            template: Some("{{ delta }}".to_string()),
            json_template: Some("{{ level }}".to_string()),
            match_regex: Some("err".to_string()),
            ..Default::default()
        };
        let settings = validate_args(&args).unwrap();
        assert!(settings.read_json);
        assert!(settings.match_template.is_some());

        let clock = ScriptedClock::new([
            Utc.timestamp_opt(0, 0).unwrap(),
            Utc.timestamp_opt(1, 0).unwrap(),
            Utc.timestamp_opt(3, 0).unwrap(),
        ]);
        let input = "{\"level\":\"ok\"}\n{\"level\":\"err\"}\n{\"level\":\"ok\"}\n";
        let mut out = Vec::new();
        let summary = stamp_stream(&settings, input.as_bytes(), &mut out, clock).unwrap();

        assert_eq!(summary.matches, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "0s\n1s\n2s\n");
    }

    #[test]
    fn test_validate_args_applies_every_curve() {
        let base = RunArgs {
            scale: "#000000 -> #ffffff".to_string(),
            scale_fast: "0".to_string(),
            scale_slow: "1s".to_string(),
            ..Default::default()
        };

        let linear = validate_args(&base).unwrap();
        assert_eq!(linear.palette.color_of(250_000_000).r, 63);

        let squared = validate_args(&RunArgs {
            scale_sqr: true,
            ..base.clone()
        })
        .unwrap();
        assert_eq!(squared.palette.color_of(500_000_000).r, 63);

        let cubert = validate_args(&RunArgs {
            scale_cubert: true,
            ..base.clone()
        })
        .unwrap();
        assert_eq!(cubert.palette.color_of(125_000_000).r, 127);

        // sqr, cube, sqrt and cubert together cancel out
        let all = validate_args(&RunArgs {
            scale_sqr: true,
            scale_cube: true,
            scale_sqrt: true,
            scale_cubert: true,
            ..base
        })
        .unwrap();
        assert_eq!(all.palette.color_of(500_000_000).r, 127);
        assert_eq!(all.palette.color_of(0).r, 0);
        assert_eq!(all.palette.color_of(1_000_000_000).r, 255);
    }
}
