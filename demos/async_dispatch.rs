use std::time::Duration;

use smart_result::prelude_async::*;

async fn load_order(id: u64) -> SmartResult<u64> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    if id % 2 == 0 {
        SmartResult::from_value(id * 100)
    } else {
        Error::not_found("Order.NotFound", format!("order {id} does not exist")).into()
    }
}

async fn charge(amount: u64) -> String {
    tokio::time::sleep(Duration::from_millis(10)).await;
    format!("charged {amount}")
}

async fn report(error: Error) -> String {
    format!("could not charge: {error}")
}

#[tokio::main]
async fn main() {
    for id in [2, 3] {
        let outcome = load_order(id).await.match_first_async(charge, report).await;
        println!("order {id}: {outcome}");
    }

    load_order(4)
        .await
        .switch_async(
            |amount| async move { println!("settled {amount}") },
            |errors| async move { println!("{} error(s)", errors.len()) },
        )
        .await;
}
