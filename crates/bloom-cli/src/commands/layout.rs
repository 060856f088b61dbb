//! Dump a layer's positions for a settled mode

use anyhow::{bail, Result};
use bloom_runtime::Mode;
use bloom_scene::{FormationLayer, PhotoLayer};

use super::load_config;

pub struct LayoutArgs {
    pub config: Option<String>,
    pub layer: String,
    pub mode: Mode,
    pub format: String,
    pub limit: Option<usize>,
}

pub fn run(args: LayoutArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let points: Vec<[f32; 3]> = match args.layer.as_str() {
        "foliage" | "petals" => {
            let layer_config = if args.layer == "foliage" {
                config.foliage
            } else {
                config.petals
            };
            let layer = FormationLayer::new(&args.layer, layer_config, args.mode);
            layer
                .positions()
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect()
        }
        "photos" => PhotoLayer::new(config.photos, args.mode)
            .positions()
            .iter()
            .map(|p| p.to_array())
            .collect(),
        other => bail!("unknown layer '{other}'; expected foliage, petals or photos"),
    };

    let shown = args.limit.unwrap_or(points.len()).min(points.len());
    let points = &points[..shown];

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(points)?),
        "csv" => {
            println!("x,y,z");
            for p in points {
                println!("{},{},{}", p[0], p[1], p[2]);
            }
        }
        other => bail!("unknown format '{other}'; expected json or csv"),
    }
    Ok(())
}
