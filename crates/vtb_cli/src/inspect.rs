//! `vtb inspect` — print the interface recovered from a source file.

use serde::Serialize;
use vtb_interface::InterfaceDescription;

use crate::pipeline::{display_name, read_source};
use crate::{GlobalArgs, InspectArgs, ReportFormat};

/// JSON shape of an inspection report.
#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    interface: &'a InterfaceDescription,
    harness: String,
    clock: Option<&'a str>,
    has_reset: bool,
}

impl<'a> InspectReport<'a> {
    fn new(interface: &'a InterfaceDescription) -> Self {
        Self {
            interface,
            harness: interface.harness_name(),
            clock: interface.clock_port().map(|p| p.name.as_str()),
            has_reset: interface.has_reset(),
        }
    }
}

/// Runs the `vtb inspect` command.
pub fn run(args: &InspectArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = read_source(&args.file)?;
    let desc = vtb_extract::extract(&source);

    if desc.is_anonymous() && !global.quiet {
        eprintln!(
            "warning: no entity declaration found in {}",
            display_name(&args.file)
        );
    }

    match args.format {
        ReportFormat::Text => print!("{}", render_text(&desc)),
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&InspectReport::new(&desc))?)
        }
    }
    Ok(0)
}

/// Formats the interface as an aligned, human-readable listing.
fn render_text(desc: &InterfaceDescription) -> String {
    let mut out = String::new();
    out.push_str(&format!("entity   {}\n", desc.entity_name));
    out.push_str(&format!("harness  {}\n", desc.harness_name()));

    out.push_str(&format!("generics ({})\n", desc.generics.len()));
    let width = desc.generics.iter().map(|g| g.name.len()).max().unwrap_or(0);
    for g in &desc.generics {
        out.push_str(&format!(
            "  {:<width$} : {} := {}\n",
            g.name, g.ty, g.default_value
        ));
    }

    out.push_str(&format!("ports ({})\n", desc.ports.len()));
    let width = desc.ports.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let clock = desc.clock_port().map(|p| p.name.as_str());
    for p in &desc.ports {
        let tag = if Some(p.name.as_str()) == clock {
            "  [clock]"
        } else if p.is_reset() {
            "  [reset]"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<width$} : {:<5} {}{tag}\n",
            p.name,
            p.direction.as_str(),
            p.ty
        ));
    }
    out
}
