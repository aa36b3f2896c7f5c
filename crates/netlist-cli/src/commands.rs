//! Command handlers: circuit construction and rendering.

use anyhow::Context;
use netlist_core::{Circuit, ComponentKind, NetlistConfig, OutputFormat, VertexId};

/// A built circuit and the component its netlist starts from.
pub struct Traced {
    pub circuit: Circuit,
    pub start: VertexId,
    /// Lines printed before the netlist.
    pub preamble: Vec<String>,
}

/// Builds the sample circuit: socket -> wire -> LM741, LM741 -> wire -> LM741.
pub fn demo(config: &NetlistConfig) -> anyhow::Result<Traced> {
    let mut circuit = Circuit::from_config(config);
    let socket = circuit.add_component(ComponentKind::ThreeTerminalSocket);
    let amp = circuit.add_component(ComponentKind::Lm741);
    let preamble = vec![circuit.name(amp).to_string()];

    let wire = circuit.add_component(ComponentKind::Wire);
    circuit
        .add_components(socket, &[wire, amp])
        .context("failed to wire the socket")?;

    let feedback = circuit.add_component(ComponentKind::Wire);
    circuit
        .add_components(amp, &[feedback, amp])
        .context("failed to wire the feedback loop")?;

    Ok(Traced {
        circuit,
        start: socket,
        preamble,
    })
}

/// Creates one component per kind and chains them in order.
pub fn chain(config: &NetlistConfig, kinds: &[ComponentKind]) -> anyhow::Result<Traced> {
    let mut circuit = Circuit::from_config(config);
    let ids: Vec<VertexId> = kinds.iter().map(|&kind| circuit.add_component(kind)).collect();
    let (&start, rest) = ids.split_first().context("at least one component is required")?;

    circuit
        .add_components(start, rest)
        .context("failed to chain components")?;

    Ok(Traced {
        circuit,
        start,
        preamble: Vec::new(),
    })
}

/// Renders the netlist in `format`, preceded by the preamble lines.
pub fn render(traced: &Traced, format: OutputFormat) -> anyhow::Result<String> {
    let mut out = preamble(traced);
    match format {
        OutputFormat::Text => out.push_str(&traced.circuit.netlist(traced.start)),
        OutputFormat::Json => {
            let report = traced.circuit.report(traced.start);
            out.push_str(&serde_json::to_string_pretty(&report)?);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Renders the recursive visit order in `format`.
///
/// Text prints one name per line; JSON prints `{"start": ..., "order": [...]}`.
pub fn render_recursive(traced: &Traced, format: OutputFormat) -> anyhow::Result<String> {
    let names: Vec<&str> = traced
        .circuit
        .depth_first_recursive(traced.start)
        .into_iter()
        .map(|id| traced.circuit.name(id))
        .collect();

    let mut out = preamble(traced);
    match format {
        OutputFormat::Text => {
            out.extend(names.iter().map(|name| format!("{name}\n")));
        }
        OutputFormat::Json => {
            let order = serde_json::json!({
                "start": traced.circuit.name(traced.start),
                "order": names,
            });
            out.push_str(&serde_json::to_string_pretty(&order)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn preamble(traced: &Traced) -> String {
    traced.preamble.iter().map(|line| format!("{line}\n")).collect()
}
