//! Command-line arguments and config layering.
//!
//! Precedence, lowest first: preset, `--config` RON file, individual flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use crate::types::{Preset, RenderConfig, RenderOverrides, CUBE_HEIGHT, CUBE_WIDTH};

/// Spin an ASCII wireframe of an OBJ mesh (or the built-in cube).
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tui-wireframe", version, allow_negative_numbers = true)]
pub struct Args {
    /// OBJ file to render. Falls back to a cube when absent or unreadable.
    pub path: Option<PathBuf>,

    /// Parameter set: `cube` (80x40) or `mesh` (170x170). Defaults to
    /// `mesh` when a path is given.
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// RON file with any subset of the render settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u16>,

    #[arg(long)]
    pub height: Option<u16>,

    /// Projection scale in cells.
    #[arg(long)]
    pub model_size: Option<f32>,

    #[arg(long)]
    pub camera_distance: Option<f32>,

    /// Field of view in degrees.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Sleep between frames in milliseconds.
    #[arg(long)]
    pub frame_ms: Option<u64>,

    /// Stop after this many frames instead of running until killed.
    #[arg(long)]
    pub frames: Option<u64>,
}

impl Args {
    pub fn preset(&self) -> Preset {
        self.preset.unwrap_or(if self.path.is_some() {
            Preset::Mesh
        } else {
            Preset::Cube
        })
    }

    /// Overrides coming from individual flags.
    pub fn overrides(&self) -> RenderOverrides {
        RenderOverrides {
            width: self.width,
            height: self.height,
            model_size: self.model_size,
            camera_distance: self.camera_distance,
            fov_degrees: self.fov,
            frame_ms: self.frame_ms,
            ..RenderOverrides::default()
        }
    }
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    Preset::from_str(s).ok_or_else(|| format!("unknown preset: {} (expected cube or mesh)", s))
}

/// Build and validate the effective render config.
pub fn resolve_config(args: &Args) -> Result<RenderConfig> {
    let mut config = args.preset().config();

    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("config: cannot read {}", path.display()))?;
        let file = RenderOverrides::from_ron(&text)
            .map_err(|e| anyhow!("config: invalid RON in {}: {}", path.display(), e))?;
        config = config.with_overrides(&file);
    }

    config = config.with_overrides(&args.overrides());
    config
        .validate()
        .map_err(|reason| anyhow!("config: {}", reason))?;
    Ok(config)
}

/// Render a ray-traced still of three spheres.
#[derive(Debug, Clone, Parser)]
#[command(name = "ascii-raytrace", version)]
pub struct RaytraceArgs {
    #[arg(long, default_value_t = CUBE_WIDTH)]
    pub width: u16,

    #[arg(long, default_value_t = CUBE_HEIGHT)]
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_follows_path_presence() {
        let none = Args::default();
        assert_eq!(none.preset(), Preset::Cube);

        let with_path = Args {
            path: Some(PathBuf::from("teapot.obj")),
            ..Args::default()
        };
        assert_eq!(with_path.preset(), Preset::Mesh);

        let forced = Args {
            path: Some(PathBuf::from("teapot.obj")),
            preset: Some(Preset::Cube),
            ..Args::default()
        };
        assert_eq!(forced.preset(), Preset::Cube);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "tui-wireframe",
            "model.obj",
            "--preset",
            "cube",
            "--width",
            "100",
            "--camera-distance",
            "-2.5",
            "--frames",
            "10",
        ])
        .unwrap();
        assert_eq!(args.path, Some(PathBuf::from("model.obj")));
        assert_eq!(args.preset, Some(Preset::Cube));
        assert_eq!(args.width, Some(100));
        assert_eq!(args.camera_distance, Some(-2.5));
        assert_eq!(args.frames, Some(10));
    }

    #[test]
    fn rejects_unknown_preset() {
        assert!(Args::try_parse_from(["tui-wireframe", "--preset", "torus"]).is_err());
    }

    #[test]
    fn flags_override_preset() {
        let args = Args {
            fov: Some(60.0),
            frame_ms: Some(0),
            ..Args::default()
        };
        let cfg = resolve_config(&args).unwrap();
        assert_eq!(cfg.fov_degrees, 60.0);
        assert_eq!(cfg.frame_ms, 0);
        assert_eq!(cfg.width, CUBE_WIDTH);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let args = Args {
            height: Some(0),
            ..Args::default()
        };
        assert!(resolve_config(&args).is_err());

        let oversized = Args {
            model_size: Some(1e8),
            ..Args::default()
        };
        let err = resolve_config(&oversized).unwrap_err();
        assert!(err.to_string().contains("model size"));

        let giant_screen = Args {
            width: Some(65535),
            height: Some(65535),
            ..Args::default()
        };
        assert!(resolve_config(&giant_screen).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/definitely/not/here.ron")),
            ..Args::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn raytrace_defaults_to_80_by_40() {
        let args = RaytraceArgs::try_parse_from(["ascii-raytrace"]).unwrap();
        assert_eq!((args.width, args.height), (80, 40));
    }
}
