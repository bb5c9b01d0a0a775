use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use clap::Parser;

use space_missions::data::loader::MissionRow;

/// (company, rockets, launch sites, success probability)
const OPERATORS: &[(&str, &[&str], &[&str], f64)] = &[
    (
        "RVSN USSR",
        &["Vostok-2M", "Soyuz U", "Kosmos-3M"],
        &["Site 1/5, Baikonur Cosmodrome, Kazakhstan", "Site 132/1, Plesetsk Cosmodrome, Russia"],
        0.92,
    ),
    (
        "NASA",
        &["Saturn V", "Space Shuttle Atlantis", "Delta II 7925"],
        &["LC-39A, Kennedy Space Center, Florida, USA"],
        0.95,
    ),
    (
        "US Air Force",
        &["Atlas-Agena B", "Titan IIIC", "Thor-Agena D"],
        &["SLC-4E, Vandenberg AFB, California, USA", "LC-41, Cape Canaveral AFS, Florida, USA"],
        0.85,
    ),
    (
        "SpaceX",
        &["Falcon 9 Block 5", "Falcon Heavy", "Falcon 1"],
        &["SLC-40, Cape Canaveral SFS, Florida, USA", "LC-39A, Kennedy Space Center, Florida, USA"],
        0.97,
    ),
    (
        "CASC",
        &["Long March 2D", "Long March 3B", "Long March 4C"],
        &["LC-2, Xichang Satellite Launch Center, China", "LC-9, Taiyuan Satellite Launch Center, China"],
        0.94,
    ),
    (
        "Arianespace",
        &["Ariane 5 ECA", "Soyuz ST-B", "Vega"],
        &["ELA-3, Guiana Space Centre, French Guiana, France"],
        0.96,
    ),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Debug, Parser)]
#[command(about = "Write a synthetic space_missions.csv")]
struct Args {
    /// Output file
    #[arg(long, default_value = "space_missions.csv")]
    out: PathBuf,

    /// Number of missions to generate
    #[arg(long, default_value_t = 1500)]
    count: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn mission_status(rng: &mut SimpleRng, success_p: f64) -> &'static str {
    let roll = rng.next_f64();
    if roll < success_p {
        "Success"
    } else if roll < success_p + (1.0 - success_p) * 0.75 {
        "Failure"
    } else if roll < success_p + (1.0 - success_p) * 0.95 {
        "Partial Failure"
    } else {
        "Prelaunch Failure"
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let first = NaiveDate::from_ymd_opt(1957, 10, 4).context("start date")?;
    let last = NaiveDate::from_ymd_opt(2022, 7, 29).context("end date")?;
    let span_days = (last - first).num_days() as u64 + 1;

    let mut dates: Vec<NaiveDate> = (0..args.count)
        .map(|_| first + Duration::days((rng.next_u64() % span_days) as i64))
        .collect();
    dates.sort();

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    for (i, date) in dates.iter().enumerate() {
        let (company, rockets, sites, success_p) = *rng.pick(OPERATORS);
        let rocket = *rng.pick(rockets);
        let rocket_status = if date.year() > 2012 {
            "Active"
        } else {
            "Retired"
        };
        let price = if rng.next_f64() < 0.4 {
            Some(format!("{:.1}", 20.0 + rng.next_f64() * 400.0))
        } else {
            None
        };
        let time = if rng.next_f64() < 0.8 {
            Some(format!("{:02}:{:02}:00", rng.next_u64() % 24, rng.next_u64() % 60))
        } else {
            None
        };

        writer
            .serialize(MissionRow {
                company: company.to_string(),
                location: rng.pick(sites).to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                time,
                rocket: rocket.to_string(),
                mission: format!("{} Flight {}", rocket, i + 1),
                rocket_status: rocket_status.to_string(),
                price,
                mission_status: mission_status(&mut rng, success_p).to_string(),
            })
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {} missions to {}", args.count, args.out.display());
    println!("Wrote {} missions to {}", args.count, args.out.display());
    Ok(())
}
