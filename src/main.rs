//! Interactive console for the order book.
//!
//! Thin shell over the core's two operations: parses line commands into
//! submit calls and renders results. Commands:
//! `buy <qty> <price>`, `sell <qty> <price>`, `book`, `json`,
//! `demo <n> [seed]`, `help`, `exit`.

use limit_order_book::{replay, BookSnapshot, Engine, Generator, GeneratorConfig, Side, TradeEvent};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

fn main() {
    let _ = env_logger::try_init();
    let mut engine = Engine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("limit order book console; type 'help' for commands");
    loop {
        print!("> ");
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }
        if !dispatch(&mut engine, line.trim()) {
            break;
        }
    }
}

/// Handles one command line. Returns false when the loop should exit.
fn dispatch(engine: &mut Engine, line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => {}
        ["exit"] | ["quit"] => return false,
        ["help"] => print_help(),
        ["buy", qty, price] => submit(engine, Side::Buy, qty, price),
        ["sell", qty, price] => submit(engine, Side::Sell, qty, price),
        ["book"] => print_book(&engine.snapshot()),
        ["json"] => match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("snapshot serialization failed: {e}"),
        },
        ["demo", n] => demo(engine, n, "0"),
        ["demo", n, seed] => demo(engine, n, seed),
        _ => println!("unrecognized command; type 'help'"),
    }
    true
}

fn print_help() {
    println!("commands:");
    println!("  buy <qty> <price>    submit a buy limit order");
    println!("  sell <qty> <price>   submit a sell limit order");
    println!("  book                 print both sides, best price first");
    println!("  json                 print the snapshot as JSON");
    println!("  demo <n> [seed]      replay n synthetic orders");
    println!("  exit                 quit");
}

fn submit(engine: &mut Engine, side: Side, qty: &str, price: &str) {
    let Ok(quantity) = qty.parse::<u64>() else {
        println!("invalid quantity '{qty}': expected a positive integer");
        return;
    };
    let Ok(price) = price.parse::<Decimal>() else {
        println!("invalid price '{price}': expected a decimal number");
        return;
    };
    match engine.submit(side, price, quantity) {
        Ok(result) => {
            for trade in &result.trades {
                print_trade(trade);
            }
            if result.resting_quantity > 0 {
                println!(
                    "order {} resting: {} @ {}",
                    result.order_id, result.resting_quantity, price
                );
            } else {
                println!("order {} fully filled", result.order_id);
            }
        }
        Err(e) => println!("rejected: {e}"),
    }
}

fn print_trade(trade: &TradeEvent) {
    println!(
        "trade executed: {} units at {} (buy {} / sell {})",
        trade.quantity, trade.price, trade.buy_order_id, trade.sell_order_id
    );
}

fn print_book(snapshot: &BookSnapshot) {
    println!("buy orders:");
    for level in &snapshot.bids {
        for order in &level.orders {
            println!(
                "  id: {}, price: {}, qty: {}",
                order.order_id, level.price, order.quantity
            );
        }
    }
    println!("sell orders:");
    for level in &snapshot.asks {
        for order in &level.orders {
            println!(
                "  id: {}, price: {}, qty: {}",
                order.order_id, level.price, order.quantity
            );
        }
    }
}

fn demo(engine: &mut Engine, n: &str, seed: &str) {
    let (Ok(num_orders), Ok(seed)) = (n.parse::<usize>(), seed.parse::<u64>()) else {
        println!("usage: demo <n> [seed]");
        return;
    };
    let orders = Generator::new(GeneratorConfig {
        seed,
        num_orders,
        ..Default::default()
    })
    .all_orders();
    match replay(engine, orders) {
        Ok(results) => {
            let trades: usize = results.iter().map(|r| r.trades.len()).sum();
            println!("replayed {num_orders} orders, {trades} trades");
            print_book(&engine.snapshot());
        }
        Err(e) => println!("replay failed: {e}"),
    }
}
