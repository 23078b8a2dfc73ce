//! The testbench template.

use tracing::debug;
use vtb_interface::{InterfaceDescription, Port};

use crate::clock::{Clock, SystemClock};
use crate::options::HarnessOptions;

/// Suffix of every signal that mirrors a port.
const SIGNAL_SUFFIX: &str = "_tb";

/// Renders testbenches with a given clock and set of options.
#[derive(Debug, Clone, Default)]
pub struct HarnessEmitter<C = SystemClock> {
    clock: C,
    options: HarnessOptions,
}

impl HarnessEmitter<SystemClock> {
    /// Creates an emitter that stamps the system time.
    pub fn new(options: HarnessOptions) -> Self {
        Self {
            clock: SystemClock,
            options,
        }
    }
}

impl<C: Clock> HarnessEmitter<C> {
    /// Creates an emitter that takes its timestamp from `clock`.
    pub fn with_clock(clock: C, options: HarnessOptions) -> Self {
        Self { clock, options }
    }

    /// Returns the options this emitter renders with.
    pub fn options(&self) -> &HarnessOptions {
        &self.options
    }

    /// Renders the testbench source for `desc`.
    ///
    /// The result has no trailing newline.
    pub fn emit(&self, desc: &InterfaceDescription) -> String {
        let clock_port = desc.clock_port();
        // Reset ports are detected for diagnostics only; the template has no
        // reset driver.
        let has_reset = desc.has_reset();
        debug!(
            entity = %desc.entity_name,
            clock = clock_port.map(|p| p.name.as_str()).unwrap_or(""),
            has_reset,
            "rendering testbench"
        );

        let mut out = String::new();
        self.render_preamble(&mut out, desc);
        render_component(&mut out, desc);
        render_signals(&mut out, desc);
        if clock_port.is_some() {
            out.push_str("\n    -- Clock period definitions\n");
            out.push_str(&format!(
                "    constant clk_period : time := {};\n",
                self.options.clock_period
            ));
        }

        out.push_str("\nbegin\n");
        render_instance(&mut out, desc);
        if let Some(port) = clock_port {
            render_clock_process(&mut out, port);
        }
        self.render_stimulus(&mut out);
        out
    }

    /// Header comment, library clauses and the harness entity.
    fn render_preamble(&self, out: &mut String, desc: &InterfaceDescription) {
        let entity = &desc.entity_name;
        let tb = desc.harness_name();
        let stamp = self.clock.timestamp();
        out.push_str(&format!(
            r#"-- Generated VHDL Testbench for {entity}
-- Generated on: {stamp}

library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;

entity {tb} is
end entity {tb};

architecture behavior of {tb} is
    -- Component Declaration
    component {entity} is"#
        ));
    }

    fn render_stimulus(&self, out: &mut String) {
        let settle = self.options.settle_time;
        out.push_str("\n    -- Stimulus process\n");
        out.push_str("    stim_proc: process\n");
        out.push_str("    begin\n");
        out.push_str(&format!("        -- hold reset state for {settle}\n"));
        out.push_str(&format!("        wait for {settle};\n\n"));
        out.push_str("        -- Insert stimulus here\n");
        // The blank stimulus line keeps the body's indentation.
        out.push_str("        \n");
        out.push_str("        wait;\n");
        out.push_str("    end process;\n\n");
        out.push_str("end behavior;");
    }
}

/// Component generic and port clauses. The generic clause is omitted when
/// there are no generics; the port clause is always written.
fn render_component(out: &mut String, desc: &InterfaceDescription) {
    if !desc.generics.is_empty() {
        let lines: Vec<String> = desc
            .generics
            .iter()
            .map(|g| format!("            {} : {} := {}", g.name, g.ty, g.default_value))
            .collect();
        out.push_str("\n        generic (\n");
        out.push_str(&lines.join(";\n"));
        out.push_str("\n        );");
    }

    let lines: Vec<String> = desc
        .ports
        .iter()
        .map(|p| format!("            {} : {} {}", p.name, p.direction, p.ty))
        .collect();
    out.push_str("\n        port (\n");
    out.push_str(&lines.join(";\n"));
    out.push_str("\n        );\n");
    out.push_str("    end component;\n\n");
}

fn render_signals(out: &mut String, desc: &InterfaceDescription) {
    out.push_str("    -- Signals\n");
    for port in &desc.ports {
        out.push_str(&format!(
            "    signal {}{SIGNAL_SUFFIX} : {};\n",
            port.name, port.ty
        ));
    }
}

/// The `UUT` instance. Generics are mapped to their own declared defaults.
fn render_instance(out: &mut String, desc: &InterfaceDescription) {
    out.push_str("\n    -- Instantiate the Unit Under Test (UUT)\n");
    out.push_str(&format!("    UUT: {}", desc.entity_name));

    if !desc.generics.is_empty() {
        let maps: Vec<String> = desc
            .generics
            .iter()
            .map(|g| format!("            {} => {}", g.name, g.default_value))
            .collect();
        out.push_str("\n        generic map (\n");
        out.push_str(&maps.join(",\n"));
        out.push_str("\n        )");
    }

    let maps: Vec<String> = desc
        .ports
        .iter()
        .map(|p| format!("            {} => {}{SIGNAL_SUFFIX}", p.name, p.name))
        .collect();
    out.push_str("\n        port map (\n");
    out.push_str(&maps.join(",\n"));
    out.push_str("\n        );\n");
}

fn render_clock_process(out: &mut String, port: &Port) {
    let signal = format!("{}{SIGNAL_SUFFIX}", port.name);
    out.push_str(&format!(
        r#"
    -- Clock process
    clk_process: process
    begin
        {signal} <= '0';
        wait for clk_period/2;
        {signal} <= '1';
        wait for clk_period/2;
    end process;
"#
    ));
}
