use signalis::{DetectDetails, IntentReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, report: &IntentReport, details: &DetectDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Scanning: \"{}\"", preview(input)), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Signals ━━━", ansi::GRAY));
    if report.all.is_empty() {
        println!("{}", palette.dim("  No signals survived"));
        if details.candidates.is_empty() {
            println!("{}", palette.dim("  (no pattern matched at all)"));
        }
    } else {
        for signal in &report.all {
            print_signal(signal, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Candidates ━━━", ansi::GRAY));
    println!(
        "  {} generated  │  {} discarded by overlap resolution",
        palette.bold(details.candidates.len().to_string()),
        palette.dim(details.discarded.to_string()),
    );

    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    println!("  {}", palette.bold(&report.summary));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Generate: {}  │  Dedup: {}",
        palette.paint(format!("{:?}", details.metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.metrics.generate), ansi::CYAN),
        palette.dim(format!("{:?}", details.metrics.dedup)),
    );
    println!();
}

fn print_signal(signal: &signalis::Signal, palette: &ansi::Palette) {
    let kind_color = match signal.kind {
        signalis::SignalKind::Decision => ansi::GREEN,
        signalis::SignalKind::Preference => ansi::CYAN,
        signalis::SignalKind::Problem => ansi::RED,
        _ => ansi::YELLOW,
    };

    println!(
        "  {} {} {}",
        palette.paint(format!("[{}]", signal.kind), kind_color),
        palette.paint(format!("{:.2}", signal.confidence), ansi::YELLOW),
        palette.bold(format!("\"{}\"", preview(&signal.matched_text))),
    );
    println!("      {}", palette.dim(format!("at byte {}", signal.position)));

    if !signal.entities.is_empty() {
        println!("      {}", palette.dim(format!("entities: {}", signal.entities.join(", "))));
    }
    if let Some(rationale) = &signal.rationale {
        println!("      {}", palette.dim(format!("rationale: {}", rationale)));
    }
    if let Some(alternatives) = &signal.alternatives {
        println!("      {}", palette.dim(format!("instead of: {}", alternatives.join(", "))));
    }
}

fn preview(s: &str) -> String {
    let flat = s.replace('\n', " ");
    let mut out: String = flat.chars().take(80).collect();
    if flat.chars().count() > 80 {
        out.push('…');
    }
    out
}
