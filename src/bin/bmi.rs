use clap::{Parser, ValueEnum};
use colored::{ColoredString, Colorize};
use tracing::info;
use tracing_subscriber::EnvFilter;
use twine_bmi::models::health::bmi::{
    BmiConfig, BmiForm, BmiResult, Category, DISCLAIMER, Rounding, Severity, UnitSystem,
};

#[derive(Parser)]
#[command(name = "bmi")]
#[command(about = "Calculate your Body Mass Index and understand your health status.")]
struct CommandLine {
    /// Height in centimeters (metric) or inches (imperial)
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Weight in kilograms (metric) or pounds (imperial)
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<String>,

    /// Unit system for height and weight
    #[arg(long, short, value_enum, default_value_t = Units::Metric)]
    units: Units,

    /// Tie-breaking rule for rounding to one decimal
    #[arg(long, value_enum, default_value_t = RoundingArg::HalfAwayFromZero)]
    rounding: RoundingArg,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Units {
    Metric,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundingArg {
    HalfAwayFromZero,
    HalfToEven,
}

impl From<RoundingArg> for Rounding {
    fn from(rounding: RoundingArg) -> Self {
        match rounding {
            RoundingArg::HalfAwayFromZero => Rounding::HalfAwayFromZero,
            RoundingArg::HalfToEven => Rounding::HalfToEven,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut form = BmiForm::with_config(BmiConfig {
        rounding: args.rounding.into(),
    });
    form.set_unit(args.units.into());
    form.set_height(args.height.unwrap_or_default());
    form.set_weight(args.weight.unwrap_or_default());

    let result = form.result();
    info!(unit = %form.unit(), has_result = result.is_some(), "computed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Some(result) => print_result(&result),
        None => print_empty(&form),
    }

    println!();
    println!("{}", DISCLAIMER.dimmed());
    Ok(())
}

fn print_result(result: &BmiResult) {
    println!("Your BMI is {}", paint(&result.value.to_string(), result.severity).bold());
    println!("{}", paint(&result.category.to_string(), result.severity));
    println!("{}", result.description);
    println!();
    println!("BMI Categories");
    for category in Category::ALL {
        let marker = if category == result.category { ">" } else { " " };
        println!(
            "{marker} {:<12} {}",
            paint(&category.to_string(), category.severity()),
            category.range_label()
        );
    }
}

fn print_empty(form: &BmiForm) {
    let unit = form.unit();
    println!(
        "Enter {} (e.g. {}) and {} (e.g. {}) to see your BMI.",
        form.height_label().to_lowercase(),
        unit.height_placeholder(),
        form.weight_label().to_lowercase(),
        unit.weight_placeholder(),
    );
}

fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Warning => text.yellow(),
        Severity::Success => text.green(),
        Severity::Danger => text.red(),
    }
}
