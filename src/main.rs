mod cli;
mod config;
mod datasources;
mod engine;
mod error;
mod models;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use datasources::{OpenMeteoClient, ReverseGeocoder};
use error::{AgroError, Result};
use models::{Crop, CropRecommendation, FarmProfile, Region, SoilType, WeatherCondition};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            if Config::exists(cli.config.as_ref()) {
                tracing::warn!("existing configuration will be overwritten");
            }
            let (_, path) = Config::setup_interactive()?;
            tracing::info!("wrote config to {}", path.display());
            Ok(())
        }
        Some(Commands::Check) => run_check(cli.config).await,
        Some(Commands::Report { sections }) => run_report(cli.config, sections).await,
        Some(Commands::Forecast {
            hours,
            fahrenheit,
            mph,
        }) => run_forecast(cli.config, hours, fahrenheit, mph).await,
        Some(Commands::Regions) => {
            print_regions();
            Ok(())
        }
        Some(Commands::Schemes) => {
            print_schemes();
            Ok(())
        }
        Some(Commands::Advise {
            crop,
            soil,
            region,
            weather,
            auto,
            json,
            general,
        }) => run_advise(cli.config, crop, soil, region, weather, auto, json, general),
        // Bare invocation behaves like `advise` on the configured profile.
        None => run_advise(cli.config, None, None, None, None, false, false, false),
    }
}

/// Load the config, or fall back to the built-in demo profile when none is
/// set up yet.
fn load_config_or_demo(config_override: Option<std::path::PathBuf>) -> Config {
    match Config::load(config_override) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}; using demo profile (run `agroadvisor init` to set up)", e);
            Config::default()
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_advise(
    config_override: Option<std::path::PathBuf>,
    crop: Option<String>,
    soil: Option<String>,
    region: Option<String>,
    weather: Option<String>,
    auto: bool,
    json: bool,
    general: bool,
) -> Result<()> {
    if general {
        print_general_practices();
        return Ok(());
    }

    let config = load_config_or_demo(config_override);
    let mut profile = config.farm_profile()?;

    if let Some(raw) = region {
        profile.region = Region::from_str(&raw)
            .ok_or_else(|| AgroError::InvalidData(format!("unrecognized region '{}'", raw)))?;
    }

    if auto {
        let suggestion = engine::suggest_defaults(profile.region, &mut rand::thread_rng());
        profile.crop = Some(suggestion.crop);
        profile.soil = Some(suggestion.soil);
        profile.weather = suggestion.weather;
        tracing::debug!(
            "auto-filled crop={} soil={} weather={}",
            suggestion.crop,
            suggestion.soil,
            suggestion.weather
        );
    }

    if let Some(raw) = crop {
        let parsed = Crop::from_str(&raw)
            .ok_or_else(|| AgroError::InvalidData(format!("unrecognized crop '{}'", raw)))?;
        profile.crop = Some(parsed);
    }
    if let Some(raw) = soil {
        let parsed = SoilType::from_str(&raw)
            .ok_or_else(|| AgroError::InvalidData(format!("unrecognized soil type '{}'", raw)))?;
        profile.soil = Some(parsed);
    }
    if let Some(raw) = weather {
        profile.weather = WeatherCondition::from_str(&raw).ok_or_else(|| {
            AgroError::InvalidData(format!("unrecognized weather condition '{}'", raw))
        })?;
    }

    let today = chrono::Local::now().date_naive();
    let recommendation = engine::resolve(
        profile.crop,
        profile.soil,
        profile.region,
        profile.weather,
        today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print_recommendation(&profile, &recommendation);
    }

    Ok(())
}

async fn run_report(
    config_override: Option<std::path::PathBuf>,
    sections: bool,
) -> Result<()> {
    let config = load_config_or_demo(config_override);
    let mut profile = config.farm_profile()?;

    // Live collaborators are best-effort: failures degrade to the static
    // report rather than failing the advisory.
    if let Some(location) = config.location {
        if config.datasources.geocoding {
            match ReverseGeocoder::new()
                .reverse_geocode(location.latitude, location.longitude)
                .await
            {
                Ok(info) => profile.location_name = Some(info.formatted()),
                Err(e) => tracing::warn!("reverse geocoding unavailable: {}", e),
            }
        }
        if config.datasources.openmeteo {
            match OpenMeteoClient::new()
                .fetch_hourly(location.latitude, location.longitude)
                .await
            {
                Ok(forecast) => profile.rainfall_forecast = Some(forecast.rainfall_outlook()),
                Err(e) => tracing::warn!("weather forecast unavailable: {}", e),
            }
        }
    }

    let today = chrono::Local::now().date_naive();
    let report = engine::assemble_report(&profile, today);

    if sections {
        for section in engine::extract_sections(&report.markdown) {
            println!("=== {} ===", section.title);
            println!("{}", section.content);
            println!();
        }
    } else {
        println!("{}", report.markdown);
    }

    Ok(())
}

async fn run_forecast(
    config_override: Option<std::path::PathBuf>,
    hours: u32,
    fahrenheit: bool,
    mph: bool,
) -> Result<()> {
    let config = Config::load(config_override)?;
    let location = config.location.ok_or_else(|| {
        AgroError::Config("no location configured; run `agroadvisor init`".into())
    })?;

    let forecast = OpenMeteoClient::new()
        .fetch_hourly(location.latitude, location.longitude)
        .await?;

    let now = chrono::Local::now().naive_local();
    let points = forecast.next_hours(now, hours);
    if points.is_empty() {
        println!("No forecast data for the next {} hours.", hours);
        return Ok(());
    }

    let temp_unit = if fahrenheit { "F" } else { "C" };
    let wind_unit = if mph { "mph" } else { "km/h" };
    println!(
        "Hourly forecast for {:.2}, {:.2} (next {} hours):",
        forecast.latitude, forecast.longitude, hours
    );
    println!(
        "{:<17} {:>7} {:>7} {:>10} {:>9}  {}",
        "Time", "Temp", "Rain %", "Wind", "Humidity", "Condition"
    );
    for point in points {
        let temp = if fahrenheit {
            point.temperature_f()
        } else {
            point.temperature_c
        };
        let wind = if mph {
            point.wind_speed_mph()
        } else {
            point.wind_speed_kmh
        };
        println!(
            "{:<17} {:>5.1}{} {:>6.0}% {:>5.1} {} {:>8.0}%  {}",
            point.timestamp.format("%m-%d %H:%M"),
            temp,
            temp_unit,
            point.precipitation_probability,
            wind,
            wind_unit,
            point.humidity_percent,
            point.condition()
        );
    }

    Ok(())
}

async fn run_check(config_override: Option<std::path::PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;

    // Surface config problems before touching the network.
    let profile = config.farm_profile()?;
    let soil_label = profile
        .soil
        .map(|s| s.as_str())
        .unwrap_or("unspecified");
    let crop_label = profile
        .crop
        .map(|c| c.as_str())
        .unwrap_or("unspecified crop");
    println!(
        "Config OK: {} ({}, {} soil, {})",
        config.farm.name, profile.region, soil_label, crop_label
    );

    let mut status_parts = Vec::new();
    match config.location {
        Some(location) => {
            let openmeteo = OpenMeteoClient::new()
                .test_connection(location.latitude, location.longitude)
                .await
                .unwrap_or(false);
            status_parts.push(if openmeteo {
                "Open-Meteo: OK"
            } else {
                "Open-Meteo: OFFLINE"
            });

            let geocoding = ReverseGeocoder::new()
                .test_connection()
                .await
                .unwrap_or(false);
            status_parts.push(if geocoding {
                "Geocoding: OK"
            } else {
                "Geocoding: OFFLINE"
            });
        }
        None => status_parts.push("Location: not configured (datasources skipped)"),
    }

    println!("{}", status_parts.join(" | "));
    Ok(())
}

fn print_recommendation(profile: &FarmProfile, rec: &CropRecommendation) {
    let soil_label = profile
        .soil
        .map(|s| s.as_str())
        .unwrap_or("unspecified");
    println!("{} Recommendations", rec.name);
    println!(
        "({} | {} soil | {})",
        profile.region, soil_label, profile.weather
    );
    println!();
    println!("Current Stage: {}", rec.stage);
    println!();
    println!("Advice");
    println!("  {}", rec.advice);
    println!();
    println!("Irrigation");
    println!("  {}", rec.irrigation);
    println!();
    println!("Pest Control");
    println!("  {}", rec.pest_control);
    println!();
    println!("Fertilizer");
    println!("  {}", rec.fertilizer);
    println!();
    println!("Detailed Crop Information");
    println!("  Growing Season:     {}", rec.details.growing_season);
    println!("  Water Requirements: {}", rec.details.water_requirements);
    println!("  Preferred Soil:     {}", rec.details.soil_types);
    println!("  Popular Varieties:  {}", rec.details.varieties);
    println!("  Crop Duration:      {}", rec.details.duration);
}

fn print_regions() {
    for region in Region::ALL {
        let profile = engine::tables::region_profile(region);
        println!("{}", region);
        println!("  Common crops: {}", profile.common_crops.join(", "));
        println!("  Common soils: {}", profile.common_soils.join(", "));
        println!("  Climate: {}", profile.climate_suitability);
        let weather: Vec<&str> = profile
            .typical_weather
            .iter()
            .map(|w| w.as_str())
            .collect();
        println!("  Typical weather: {}", weather.join(", "));
        println!();
    }
}

fn print_general_practices() {
    println!("General Crop Recommendations");
    println!();
    for practice in &engine::tables::GENERAL_PRACTICES {
        println!("{} ({})", practice.name, practice.season);
        println!("  Advice: {}", practice.advice);
        println!("  Cultivation: {}", practice.cultivation);
        println!();
    }
}

fn print_schemes() {
    println!("Government Support Schemes");
    println!();
    for scheme in &engine::tables::SCHEME_LISTINGS {
        println!("{}", scheme.name);
        println!("  {}", scheme.summary);
        println!();
    }
}
