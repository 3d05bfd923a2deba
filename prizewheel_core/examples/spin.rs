use prizewheel_core::{spin, Presenter, ProvablyFairDraw, Wheel};

fn main() {
    // Example end-to-end spin: select on one side, resolve on the other
    let wheel = Wheel::demo();
    let draw = ProvablyFairDraw::new("example-server-seed", "example-client-seed", 1);
    let selection = match spin(&wheel, &draw) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("spin failed: {e}");
            return;
        }
    };
    let message = selection.to_message();

    let mut client_slots = wheel.slots.clone();
    client_slots.reverse();
    let presenter = match Presenter::new(&client_slots) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("presenting view rejected: {e}");
            return;
        }
    };
    println!(
        "server_seed_hash={} draw={:.4} slot={} server_index={} client_index={:?}",
        draw.server_seed_hash_hex(),
        selection.draw,
        message.slot_id,
        message.index,
        presenter.resolve(&message)
    );
}
