//! Keeps the vehicles of a city simulation in four ordered trees, one per
//! category, and runs a few queries against them.
//!
//! Run with `RUST_LOG=trace cargo run --example city` to see the tree log
//! every structural change.

use ordered_tree::tree::NodeRef;
use ordered_tree::OrderedTree;

/// Prints the tree sideways: right subtree above, left subtree below, one
/// level of indentation per depth.
fn print_shape(node: Option<NodeRef<'_, u32>>, depth: usize) {
    if let Some(node) = node {
        print_shape(node.right(), depth + 1);
        println!("{:indent$}{}", "", node.key(), indent = depth * 4);
        print_shape(node.left(), depth + 1);
    }
}

fn fleet(name: &str, ids: &[u32]) -> OrderedTree<u32> {
    let tree: OrderedTree<u32> = ids.iter().copied().collect();
    println!("{} ({} vehicles): {:?}", name, tree.len(), tree);
    print_shape(tree.root(), 1);
    tree
}

fn main() {
    env_logger::init();

    let mut public_transport = fleet("public transport", &[10, 12, 6, 3, 9, 14]);
    let commercial = fleet("commercial", &[23, 15, 29, 31, 12, 3]);
    let private = fleet("private", &[15, 17, 19, 11, 20]);
    let services = fleet("services", &[20, 11, 21, 27, 55, 6, 2]);

    println!("services has vehicle 27: {}", services.search(&27));
    println!("services has vehicle 1: {}", services.search(&1));

    let mut in_order = Vec::new();
    services.in_order(|id| in_order.push(*id));
    println!("services in order: {:?}", in_order);

    let mut pre_order = Vec::new();
    commercial.pre_order(|id| pre_order.push(*id));
    println!("commercial pre-order: {:?}", pre_order);

    let mut post_order = Vec::new();
    public_transport.post_order(|id| post_order.push(*id));
    println!("public transport post-order: {:?}", post_order);

    println!("lowest services id: {:?}", services.min());
    println!("highest private id: {:?}", private.max());

    public_transport.remove(&9);
    println!("public transport after retiring 9: {:?}", public_transport);
    print_shape(public_transport.root(), 1);
}
