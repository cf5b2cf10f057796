mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ming_base::{
    Branch, Element, Palace, Pillar, SolarTerm, Stem, Topic, component_strength, ten_god_map,
    ten_god_of,
};
use ming_chart::{
    BaziProfile, FourPillars, PalaceReading, PalaceSummary, QmdjChart, align, analyze,
    four_pillars, generate, read_palace, summarize_all,
};
use ming_time::{CivilDate, CivilDateTime};

use crate::config::MingConfig;

#[derive(Parser)]
#[command(name = "ming", about = "Four Pillars and nine-palace chart CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars for a civil date (UTC+8)
    Pillars {
        /// Date (YYYY-MM-DD)
        date: CivilDate,
        /// Hour 0-23; omit when unknown
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
    /// Sexagenary pillar by cycle index, or of a year
    Ganzhi {
        /// Cycle index (any integer, taken mod 60)
        #[arg(long, conflicts_with = "year")]
        index: Option<i64>,
        /// Civil year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Ten God of a stem relative to a Day Master (all stems if no target)
    TenGod {
        /// Day Master stem (glyph or pinyin)
        dm: Stem,
        /// Target stem (glyph or pinyin)
        target: Option<Stem>,
    },
    /// Full BaZi profile for a birth date or a given set of pillars
    Bazi {
        /// Birth date (YYYY-MM-DD)
        #[arg(required_unless_present = "pillars")]
        date: Option<CivilDate>,
        /// Birth hour 0-23; omit when unknown
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
        /// Pillars as text, e.g. "甲子 丙午 庚寅 戊戌" (hour may be ??)
        #[arg(long, conflicts_with_all = ["date", "hour"])]
        pillars: Option<FourPillars>,
    },
    /// Nine-palace chart for a moment
    Chart {
        /// Moment (YYYY-MM-DDThh:mm, UTC+8)
        at: CivilDateTime,
    },
    /// Reading of one palace
    Reading {
        /// Moment (YYYY-MM-DDThh:mm, UTC+8)
        at: CivilDateTime,
        /// Palace number 1-9 or topic name (Career, Wealth, ...)
        #[arg(long, default_value = "5")]
        palace: String,
    },
    /// Strength of a component element inside a palace element
    Strength {
        /// Component element
        component: Element,
        /// Palace element
        palace: Element,
    },
    /// All nine palaces ranked for a moment
    Summary {
        /// Moment (YYYY-MM-DDThh:mm, UTC+8)
        at: CivilDateTime,
    },
    /// Alignment of a birth chart with one palace of a moment
    Align {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: CivilDate,
        /// Birth hour 0-23; omit when unknown
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        birth_hour: Option<u32>,
        /// Moment (YYYY-MM-DDThh:mm, UTC+8)
        #[arg(long)]
        at: CivilDateTime,
        /// Palace number 1-9 or topic name
        #[arg(long)]
        palace: String,
    },
    /// Approximate solar term and Chinese hour for a moment
    Term {
        /// Moment (YYYY-MM-DDThh:mm, UTC+8)
        at: CivilDateTime,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn require_palace(s: &str) -> Palace {
    if let Ok(n) = s.trim().parse::<u8>() {
        return Palace::from_number(n)
            .unwrap_or_else(|| fail(&format!("Invalid palace: {n} (1-9)")));
    }
    Topic::from_name(s)
        .map(Topic::palace)
        .unwrap_or_else(|| fail(&format!("Unknown palace or topic: {s}")))
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(&format!("Failed to serialize output: {e}")),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = MingConfig::load(cli.config.as_deref()).unwrap_or_else(|e| fail(&e));
    let json = cli.json;

    match cli.command {
        Commands::Pillars { date, hour } => {
            let p = four_pillars(&date, hour, &config.pillars);
            if json {
                print_json(&p);
            } else {
                print_pillars(&p);
            }
        }

        Commands::Ganzhi { index, year } => {
            let p = match (index, year) {
                (Some(n), _) => Pillar::from_cycle_index(n),
                (None, Some(y)) => Pillar::of_year(y),
                (None, None) => fail("Give --index or --year"),
            };
            if json {
                print_json(&p);
            } else {
                let [v1, v2] = p.void_branches();
                println!("{} ({}) - cycle index {}", p, p.pinyin(), p.cycle_index());
                println!("Xun leader: {}", p.xun_leader());
                println!("Void: {v1}{v2}");
            }
        }

        Commands::TenGod { dm, target } => match target {
            Some(t) => {
                let tg = ten_god_of(dm, t);
                if json {
                    print_json(&tg);
                } else {
                    println!(
                        "{} vs {}: {} ({}, {})",
                        dm,
                        t,
                        tg.name(),
                        tg.chinese(),
                        tg.category().name()
                    );
                }
            }
            None => {
                let map = ten_god_map(dm);
                if json {
                    print_json(&map);
                } else {
                    println!("Day Master {} ({} {})", dm, dm.polarity(), dm.element());
                    for (stem, tg) in map {
                        println!(
                            "  {} {:<5} {:<18} {}",
                            stem,
                            stem.pinyin(),
                            tg.name(),
                            tg.chinese()
                        );
                    }
                }
            }
        },

        Commands::Bazi {
            date,
            hour,
            pillars,
        } => {
            let pillars = match (pillars, date) {
                (Some(p), _) => p,
                (None, Some(d)) => four_pillars(&d, hour, &config.pillars),
                (None, None) => fail("Give a birth date or --pillars"),
            };
            let profile = analyze(&pillars);
            if json {
                print_json(&profile);
            } else {
                print_profile(&profile);
            }
        }

        Commands::Chart { at } => {
            let chart = generate(&at, &config.qmdj_config());
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Reading { at, palace } => {
            let chart = generate(&at, &config.qmdj_config());
            let reading = read_palace(&chart, require_palace(&palace));
            if json {
                print_json(&reading);
            } else {
                print_reading(&reading);
            }
        }

        Commands::Strength { component, palace } => {
            let s = component_strength(component, palace);
            if json {
                print_json(&s);
            } else {
                let (label, advice) = s.friendly();
                println!(
                    "{component} in {palace}: {} ({:+}) - {label}, {advice}",
                    s.name(),
                    s.score()
                );
            }
        }

        Commands::Summary { at } => {
            let ranked = summarize_all(&at, &config.qmdj_config());
            if json {
                print_json(&ranked);
            } else {
                print_summary(&ranked);
            }
        }

        Commands::Align {
            birth,
            birth_hour,
            at,
            palace,
        } => {
            let profile = analyze(&four_pillars(&birth, birth_hour, &config.pillars));
            let chart = generate(&at, &config.qmdj_config());
            let a = align(&profile, &chart, require_palace(&palace), &config.alignment);
            if json {
                print_json(&a);
            } else {
                println!("Alignment: {:.1}/10 - {}", a.score, a.verdict);
                println!("  base {:.1}", a.base);
                for item in &a.breakdown {
                    println!("  {item}");
                }
            }
        }

        Commands::Term { at } => {
            let term = SolarTerm::approximate(at.month, at.day);
            let branch = Branch::from_hour(at.hour);
            if json {
                print_json(&(term, branch.chinese_hour()));
            } else {
                println!("Solar term: {} ({})", term.glyph(), term.name());
                println!("Chinese hour: {} ({})", branch.chinese_hour(), branch.animal());
            }
        }
    }
}

fn print_pillars(p: &FourPillars) {
    for (position, pillar) in p.iter() {
        println!(
            "{:<6} {} ({}) {} {}",
            position.name(),
            pillar,
            pillar.pinyin(),
            pillar.stem.element(),
            pillar.branch.animal()
        );
    }
    if !p.hour_known() {
        println!("Hour   unknown");
    }
    println!("Day Master: {} ({})", p.day_master(), p.day_master().element());
}

fn print_profile(profile: &BaziProfile) {
    print_pillars(&profile.pillars);
    let s = &profile.strength;
    println!(
        "Strength: {} ({:.1}) - {} in {}, support {:.1}, drain {:.1}",
        s.category,
        s.score,
        s.seasonal.name(),
        s.season.name(),
        s.support,
        s.drain
    );
    let u = &profile.useful_gods;
    print!("Useful Gods: primary {}, secondary {}", u.primary, u.secondary);
    if let Some(t) = u.tertiary {
        print!(", tertiary {t}");
    }
    println!();
    if !u.unfavorable.is_empty() {
        let names: Vec<&str> = u.unfavorable.iter().map(|e| e.name()).collect();
        println!("Unfavorable: {}", names.join(", "));
    }
    println!("  {}", u.reasoning);

    let st = &profile.structures;
    match &st.wealth_vault {
        Some(loc) => println!("Wealth Vault: {} in {} pillar", loc.branch, loc.position.name()),
        None => println!("Wealth Vault: none ({} absent)", st.wealth_vault_branch),
    }
    if st.has_nobleman() {
        for loc in &st.nobleman {
            println!("Nobleman: {} in {} pillar", loc.branch, loc.position.name());
        }
    }
    for c in &st.six_combinations {
        println!("Six Combination: {}", c.label);
    }
    for c in &st.six_clashes {
        println!("Six Clash: {}", c.label);
    }
    for h in &st.three_harmonies {
        let state = if h.complete { "complete" } else { "partial" };
        println!("Three Harmony: {} frame {}/3 ({state})", h.element, h.present);
    }

    let d = &profile.dominant;
    println!(
        "Dominant Ten God: {} ({}) - {}",
        d.ten_god.name(),
        d.weight,
        d.profile.profile_name
    );
    println!(
        "Activation: {:.1}/10 (primary {:.1}%, secondary {:.1}%, unfavorable {:.1}%)",
        profile.activation.score,
        profile.activation.primary_percentage,
        profile.activation.secondary_percentage,
        profile.activation.unfavorable_percentage
    );
}

fn print_chart(chart: &QmdjChart) {
    let m = &chart.metadata;
    println!(
        "{} {} ({}) - {}",
        chart.moment,
        chart.structure,
        chart.structure_chinese(),
        chart.method.chinese()
    );
    let [v1, v2] = m.void_branches;
    println!(
        "Ganzhi: {}  {}  {}  Xun {}  Void {v1}{v2}",
        m.pillars,
        m.chinese_hour,
        m.solar_term.glyph(),
        m.xun_leader
    );
    for slot in chart.slots() {
        let door = slot.door.map_or_else(|| "中".to_string(), |d| d.chinese());
        let deity = slot.deity.map_or("-", |d| d.chinese());
        println!(
            "  {}  heaven {}  earth {}  {}  {}  {}",
            slot.palace,
            slot.heaven_stem,
            slot.earth_stem,
            slot.star.chinese(),
            door,
            deity
        );
    }
}

fn print_reading(r: &PalaceReading) {
    let p = &r.palace;
    println!(
        "Palace {} {} ({}) {} - {} [{}]",
        p.number, p.name, p.glyph, p.direction, p.topic, p.element
    );
    println!("  {}", p.description);
    for c in &r.components {
        println!(
            "  {:<11} {} {:<10} {:<6} {:<10} {:+}  {}",
            c.kind.key(),
            c.glyph,
            c.name,
            c.element.name(),
            c.strength.name(),
            c.score,
            c.friendly_strength
        );
    }
    if let Some(d) = &r.deity {
        println!("  deity       {} {} - {}", d.glyph, d.name, d.function);
    }
    println!(
        "Score: {:.1}/10 (total {:+}) - {}",
        r.normalized, r.component_total, r.verdict
    );
    println!("{}", r.summary);
    println!("{}", r.advice);
}

fn print_summary(ranked: &[PalaceSummary]) {
    for s in ranked {
        println!(
            "{:>4.1}  {:<16} {:<10} {:<17} {} Door, {} Star",
            s.score,
            s.palace.to_string(),
            s.topic.name(),
            s.verdict.name(),
            s.door,
            s.star
        );
    }
}
