use anyhow::Result;
use sorairo_weather::CardSession;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    sorairo_core::init()?;

    // Create and initialize application
    let mut app = sorairo_core::App::new()?;
    app.initialize()?;

    let config = app.shared_config();
    let mut session = CardSession::from_config(&config)?;
    let region = session.search(&config.location.initial_query).await;

    tracing::info!(
        region = %region,
        provider = ?session.source().kind(),
        "Sorairo session started"
    );

    let profile = session.profile();
    let theme = session.theme();
    println!("Sorairo - {} ({})", session.location_text(), region.area().label());
    println!(
        "  {} {}℃  humidity {}%  wind {}m/s  theme {}",
        profile.condition, profile.temperature, profile.humidity, profile.wind_speed, theme.icon
    );

    for index in 0..3 {
        let page = session.page_at(index)?;
        println!("\n[{}] {}", page.category, page.title);
        println!("  {}", page.description);
        for metric in &page.metrics {
            println!("  {}: {}", metric.label, metric.value);
        }
    }

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
