//! Demo entry point: build a small cinema, exercise the behavioral stubs,
//! and persist every extent to disk.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;

use cinema_app::{telemetry, Cinema};
use cinema_catalog::{Actor, Movie};
use cinema_core::{LogNotifier, SystemClock};
use cinema_people::{Customer, Employee};
use cinema_sales::{Order, Stampcard};
use cinema_venue::{Hall, Seat};

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).context("invalid calendar date")
}

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create data directory {}", dir.display()))?;

    let clock = SystemClock;
    let sink = LogNotifier;
    let mut cinema = Cinema::new();

    Movie::create(
        &mut cinema.movies,
        &clock,
        "Inception",
        vec!["Christopher Nolan".to_string()],
        vec!["Sci-Fi".to_string(), "Thriller".to_string()],
        "IMAX",
        148,
        date(2010, 7, 16)?,
    )?;
    Actor::create(
        &mut cinema.actors,
        &clock,
        "Leonardo",
        "DiCaprio",
        "Male",
        date(1974, 11, 11)?,
    )?;
    Hall::create(&mut cinema.halls, 1)?;
    Hall::create(&mut cinema.halls, 2)?;
    Seat::create(&mut cinema.seats, 1, 'A')?;
    Seat::create(&mut cinema.seats, 2, 'A')?;

    let customer = Customer::create(
        &mut cinema.customers,
        &clock,
        "Ada",
        "Lovelace",
        date(1990, 12, 10)?,
    )?;
    customer.buy_ticket("Inception", &sink)?;
    customer.request_stamp_card(&sink);

    let employee = Employee::create(
        &mut cinema.employees,
        &clock,
        "Grace",
        "Hopper",
        date(1985, 12, 9)?,
        date(2015, 3, 1)?,
        2800.0,
        None,
    )?;
    employee.access_shift_list(&sink);

    Order::create(&mut cinema.orders, &clock, "4111-xxxx")?;
    let card = Stampcard::create(&mut cinema.stampcards, &clock);
    card.add_stamp()?;

    for movie in &cinema.movies {
        tracing::info!("{}", movie.summary(&clock));
    }
    for hall in &cinema.halls {
        tracing::info!("{hall}");
    }

    cinema.save_to(&dir)?;
    tracing::info!(dir = %dir.display(), "cinema state written");
    Ok(())
}
