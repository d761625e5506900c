//! Concierge booking desk
//!
//! Interactive console front end over the concierge-rs allocator

use clap::Parser;
use concierge_rs::{Hotel, HotelLayout, MAX_REQUEST, MIN_REQUEST};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(about = "Interactive hotel room booking desk")]
struct Args {
    /// Path to a TOML layout file (defaults to the built-in 97-room layout)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Seed for the random occupancy generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fraction of rooms booked when generating random occupancy
    #[arg(long, default_value_t = 0.3)]
    occupancy_rate: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let layout = match &args.layout {
        Some(path) => HotelLayout::load(path)?,
        None => HotelLayout::default(),
    };
    info!(
        floors = layout.floor_count(),
        rooms = layout.total_rooms(),
        "hotel initialized"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut hotel = Hotel::with_layout(layout);

    println!("{}", hotel.render_grid());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n--- MENU ---");
        println!("1. Book Rooms");
        println!("2. Generate Random Occupancy");
        println!("3. Reset System");
        println!("4. Show Grid");
        println!("0. Exit");
        print!("Enter choice: ");
        io::stdout().flush()?;

        let Some(choice) = next_line(&mut lines)? else {
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("Exiting...");
                break;
            }
            "1" => {
                print!("Enter number of rooms ({}-{}): ", MIN_REQUEST, MAX_REQUEST);
                io::stdout().flush()?;
                let Some(reply) = next_line(&mut lines)? else {
                    break;
                };
                let Ok(count) = reply.parse::<usize>() else {
                    println!("Invalid input. Please enter a number.");
                    continue;
                };
                match hotel.book_rooms(count) {
                    Ok(booking) => {
                        let numbers: Vec<String> = booking
                            .rooms
                            .iter()
                            .map(|room| room.to_string())
                            .collect();
                        println!("\n>>> Success! Booked: {}", numbers.join(", "));
                        println!(">>> Travel Cost Metric: {}", booking.cost);
                        println!("{}", hotel.render_grid());
                    }
                    Err(err) => println!("\n>>> Error: {}", err),
                }
            }
            "2" => {
                hotel.randomize_occupancy(&mut rng, args.occupancy_rate);
                println!("\n>>> Random occupancy generated.");
                println!("{}", hotel.render_grid());
            }
            "3" => {
                hotel.reset();
                println!("\n>>> System Reset. All rooms available.");
                println!("{}", hotel.render_grid());
            }
            "4" => println!("{}", hotel.render_grid()),
            _ => println!("Invalid command."),
        }
    }

    Ok(())
}

/// Read the next trimmed stdin line, `None` on end of input
fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
