use lull::func::noop;
use lull::task::delay;
use lull::text::capitalize;

#[lull::test]
async fn helpers_compose() {
    delay(5).await;
    assert_eq!(capitalize("ready"), "Ready");
    noop();
}
