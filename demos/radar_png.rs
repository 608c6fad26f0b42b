use std::env;

use polar_chart::core::{LabelSource, Viewport};
use polar_chart::demo_data::load_demo_dataset;
use polar_chart::render::CairoRenderer;
use polar_chart::telemetry::init_default_tracing;
use polar_chart::{RadarChart, RadarChartConfig};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 900;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let dataset = env::args().nth(1).unwrap_or_else(|| "mtcars".to_owned());
    let output = env::args()
        .nth(2)
        .unwrap_or_else(|| format!("{dataset}_radar.png"));

    let table = load_demo_dataset(&dataset)?;
    let viewport = Viewport::new(WIDTH, HEIGHT);
    // The widgets table names its rows in a text column.
    let config = match dataset.as_str() {
        "widgets" => RadarChartConfig::star(viewport)
            .with_label_source(LabelSource::Column("Name".to_owned())),
        _ => RadarChartConfig::new(viewport),
    }
    .with_title(dataset.as_str());

    let renderer = CairoRenderer::new(WIDTH as i32, HEIGHT as i32)?;
    let mut chart = RadarChart::new(renderer, config)?;
    chart.render(&table)?;

    let stats = chart.renderer().last_stats();
    chart.renderer().write_png(&output)?;
    println!(
        "wrote {output}: polygons={} texts={}",
        stats.polygons_drawn, stats.texts_drawn
    );

    Ok(())
}
