use clap::Parser;
use nagare::prelude::*;
use std::io::{self, Write};

/// An interactive terminal builder for chatbot message flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the saved-flows slot
    #[arg(default_value = "data")]
    store_dir: String,

    /// Print the stored flows and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::open(&cli.store_dir);

    if cli.list {
        print_flows(&store.load_all());
        return;
    }

    run_interactive(FlowEditor::new(store));
}

/// Runs the interactive editing session until the user quits.
fn run_interactive(mut editor: FlowEditor) {
    println!("--- Nagare Interactive Mode ---");
    println!("Type 'help' for the command list.");

    loop {
        let Some(line) = read_command() else {
            break;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["quit"] | ["exit"] => break,
            ["add"] => add_node(&mut editor),
            ["text", index, rest @ ..] => set_text(&mut editor, index, rest),
            ["move", index, x, y] => move_node(&mut editor, index, x, y),
            ["link", source, target] => link_nodes(&mut editor, source, target),
            ["unlink", index] => unlink_edge(&mut editor, index),
            ["del", index] => delete_node(&mut editor, index),
            ["select", index] => select_node(&mut editor, index),
            ["deselect"] => editor.clear_selection(),
            ["show"] => show_graph(&editor),
            ["check"] => check_flow(&editor),
            ["save"] => save_flow(&editor),
            ["flows"] => print_flows(&editor.saved_flows()),
            ["load", index] => load_flow(&mut editor, index),
            _ => println!("Unknown or incomplete command. Type 'help' for the command list."),
        }
    }
}

// --- 1. Graph Editing Commands ---

fn add_node(editor: &mut FlowEditor) {
    // Stack fresh nodes downwards so the canvas layout stays readable.
    let position = Position::new(80.0, 40.0 + 90.0 * editor.nodes().len() as f64);
    let node = editor.dropped(NodeKind::Message, position);
    println!("Added node #{} ({})", editor.nodes().len(), node.kind);
}

fn set_text(editor: &mut FlowEditor, index: &str, rest: &[&str]) {
    if rest.is_empty() {
        println!("Usage: text <node> <new text>");
        return;
    }
    let Some(id) = node_id_at(editor, index) else {
        return;
    };
    editor.set_node_text(&id, &rest.join(" "));
    println!("Updated text of node #{}", index);
}

fn move_node(editor: &mut FlowEditor, index: &str, x: &str, y: &str) {
    let Some(id) = node_id_at(editor, index) else {
        return;
    };
    let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
        println!("Coordinates must be numbers.");
        return;
    };
    editor.nodes_changed(&[NodeChange::Moved {
        id,
        position: Position::new(x, y),
    }]);
}

fn link_nodes(editor: &mut FlowEditor, source: &str, target: &str) {
    let Some(source_id) = node_id_at(editor, source) else {
        return;
    };
    let Some(target_id) = node_id_at(editor, target) else {
        return;
    };
    editor.connected(&source_id, &target_id);
    println!("Linked node #{} -> node #{}", source, target);
}

fn unlink_edge(editor: &mut FlowEditor, index: &str) {
    let Some(id) = edge_id_at(editor, index) else {
        return;
    };
    editor.edges_changed(&[EdgeChange::Removed { id }]);
}

fn delete_node(editor: &mut FlowEditor, index: &str) {
    let Some(id) = node_id_at(editor, index) else {
        return;
    };
    editor.nodes_changed(&[NodeChange::Removed { id }]);
    println!("Removed node #{} and its connections", index);
}

fn select_node(editor: &mut FlowEditor, index: &str) {
    let Some(id) = node_id_at(editor, index) else {
        return;
    };
    editor.node_clicked(&id);
    if let Some(node) = editor.selected_node() {
        println!("Selected node #{}: \"{}\"", index, node.text());
    }
}

// --- 2. Inspection Commands ---

fn show_graph(editor: &FlowEditor) {
    if editor.graph().is_empty() {
        println!("The canvas is empty. Use 'add' to create a node.");
        return;
    }

    println!("Nodes:");
    for (i, node) in editor.nodes().iter().enumerate() {
        let marker = if editor.selected_node_id() == Some(node.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            " {}{}: [{}] \"{}\" at ({:.0}, {:.0})",
            marker,
            i + 1,
            node.kind,
            node.text(),
            node.position.x,
            node.position.y
        );
    }

    if !editor.edges().is_empty() {
        println!("Edges:");
        for (i, edge) in editor.edges().iter().enumerate() {
            println!(
                "  {}: node #{} -> node #{}",
                i + 1,
                node_index_of(editor, &edge.source),
                node_index_of(editor, &edge.target)
            );
        }
    }
}

fn check_flow(editor: &FlowEditor) {
    match validate(editor.nodes(), editor.edges()) {
        Ok(()) => println!("Flow is structurally valid."),
        Err(e) => println!("Flow is not saveable yet: {}", e),
    }
}

// --- 3. Persistence Commands ---

fn save_flow(editor: &FlowEditor) {
    let default_name = format!("Flow @ {}", jiff::Zoned::now().strftime("%H:%M:%S"));

    let outcome = editor.try_save(|| {
        let name = prompt_for_input("Name this flow ('-' cancels)", Some(&default_name));
        if name == "-" { None } else { Some(name) }
    });

    match outcome {
        Ok(SaveOutcome::Saved(flow)) => println!("Saved flow \"{}\"", flow.name),
        Ok(SaveOutcome::Cancelled) => println!("Save cancelled."),
        Err(e) => println!("{}", e),
    }
}

fn print_flows(flows: &[SavedFlow]) {
    if flows.is_empty() {
        println!("No flows saved yet.");
        return;
    }
    println!("Saved flows:");
    for (i, flow) in flows.iter().enumerate() {
        println!(
            "  {}: \"{}\" ({} nodes, {} edges)",
            i + 1,
            flow.name,
            flow.nodes.len(),
            flow.edges.len()
        );
    }
}

fn load_flow(editor: &mut FlowEditor, index: &str) {
    let flows = editor.saved_flows();
    let Some(flow) = index
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| flows.get(i))
    else {
        println!("No saved flow '{}'. Use 'flows' to list them.", index);
        return;
    };
    editor.load_flow(flow);
    println!("Loaded \"{}\" onto the canvas.", flow.name);
}

// --- 4. Helpers ---

/// Resolves a 1-based node index from `show` into the node's id.
fn node_id_at(editor: &FlowEditor, index: &str) -> Option<String> {
    let found = index
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| editor.nodes().get(i))
        .map(|n| n.id.clone());
    if found.is_none() {
        println!("No node '{}'. Use 'show' to list nodes.", index);
    }
    found
}

/// Resolves a 1-based edge index from `show` into the edge's id.
fn edge_id_at(editor: &FlowEditor, index: &str) -> Option<String> {
    let found = index
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| editor.edges().get(i))
        .map(|e| e.id.clone());
    if found.is_none() {
        println!("No edge '{}'. Use 'show' to list edges.", index);
    }
    found
}

/// The 1-based display index of a node id, or '?' for a foreign id.
fn node_index_of(editor: &FlowEditor, id: &str) -> String {
    match editor.nodes().iter().position(|n| n.id == id) {
        Some(pos) => (pos + 1).to_string(),
        None => "?".to_string(),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add                    Drop a new message node onto the canvas");
    println!("  text <node> <text>     Replace a node's message text");
    println!("  move <node> <x> <y>    Move a node to a new position");
    println!("  link <src> <dst>       Connect two nodes");
    println!("  del <node>             Remove a node and its connections");
    println!("  unlink <edge>          Remove a single connection");
    println!("  select <node>          Open a node in the settings panel");
    println!("  deselect               Close the settings panel");
    println!("  show                   Print the current canvas");
    println!("  check                  Validate the flow without saving");
    println!("  save                   Validate, name and persist the flow");
    println!("  flows                  List the stored flows");
    println!("  load <flow>            Load a stored flow onto the canvas");
    println!("  quit                   Leave the editor");
}

/// Reads one command line; `None` once input is exhausted.
fn read_command() -> Option<String> {
    print!("nagare> ");
    io::stdout().flush().unwrap();

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    if read == 0 { None } else { Some(line) }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}
