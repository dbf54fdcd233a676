use console::Style;
use exposim_core::batch::{BatchConfig, BatchSummary};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    warning: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            warning: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_batch_summary(config: &BatchConfig) {
    let s = Styles::new();
    let params = config.effect.params(config.strength);

    println!();
    println!("  {}", s.title.apply_to("Exposure Simulator"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Effect"),
        s.method.apply_to(config.effect)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Strength"),
        s.value.apply_to(format!("{:.2}", params.strength))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Exposure"),
        s.value.apply_to(format!("{:.2}", params.exposure_factor))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Weight"),
        s.value.apply_to(format!("{:.2}", params.weight))
    );
    match config.gamma {
        Some(gamma) => println!(
            "  {:<14}{}",
            s.label.apply_to("Gamma"),
            s.value.apply_to(gamma)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Gamma"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threads"),
        s.value.apply_to(if config.parallel { "all cores" } else { "1" })
    );
    println!();
}

pub fn print_batch_result(summary: &BatchSummary) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Processed"),
        s.value.apply_to(format!("{}/{}", summary.written, summary.total))
    );
    if !summary.skipped.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skipped"),
            s.warning.apply_to(summary.skipped.len())
        );
        for item in &summary.skipped {
            println!(
                "    {}  {}",
                s.path.apply_to(item.path.display()),
                s.label.apply_to(&item.reason)
            );
        }
    }
    if !summary.failed.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Not written"),
            s.warning.apply_to(summary.failed.len())
        );
        for item in &summary.failed {
            println!(
                "    {}  {}",
                s.path.apply_to(item.path.display()),
                s.label.apply_to(&item.reason)
            );
        }
    }
    println!(
        "\nAll images saved to {}",
        s.path.apply_to(summary.output_dir.display())
    );
}
