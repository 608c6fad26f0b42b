use polar_chart::core::Viewport;
use polar_chart::demo_data::load_demo_dataset;
use polar_chart::render::NullRenderer;
use polar_chart::telemetry::init_default_tracing;
use polar_chart::{RadarChart, RadarChartConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let table = load_demo_dataset("mtcars")?;
    let config = RadarChartConfig::new(Viewport::new(1200, 900)).with_title("mtcars");
    let mut chart = RadarChart::new(NullRenderer::default(), config)?;

    let plan = chart.plan(&table)?;
    println!("scaled data:\n{}", plan.table);
    println!(
        "grid: rows={} columns={} legend={:?}",
        plan.grid.rows, plan.grid.columns, plan.grid.legend_cell
    );
    println!("reference circles: {:?}", plan.ticks);

    let frame = chart.frame_from_plan(&plan)?;
    println!(
        "frame primitives: polygons={} texts={}",
        frame.polygons.len(),
        frame.texts.len()
    );

    chart.render(&table)?;
    println!("frames rendered: {}", chart.renderer().frames_rendered);
    println!("config contract:\n{}", chart.config().to_json_contract_v1_pretty()?);

    Ok(())
}
