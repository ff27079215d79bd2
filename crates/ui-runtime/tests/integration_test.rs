use async_trait::async_trait;
use std::time::Duration;
use ui_runtime::{Component, ComponentActor, Mailbox, Response, TimerHandle};

// --- Test Component ---

/// A pulse that lights up and switches itself off after a delay, with a generation guard
/// so only the latest pulse's timer acts.
#[derive(Default)]
struct Pulse {
    lit: bool,
    generation: u64,
    pending: Option<TimerHandle>,
    completed_fetches: Vec<u64>,
}

#[derive(Debug)]
enum PulseRequest {
    Fire {
        length: Duration,
    },
    Cancel,
    Fetch {
        generation: u64,
        delay: Duration,
    },
    Snapshot {
        respond_to: Response<(bool, Vec<u64>)>,
    },
}

#[derive(Debug)]
enum PulseSignal {
    Off { generation: u64 },
    Fetched { generation: u64 },
}

#[async_trait]
impl Component for Pulse {
    type Request = PulseRequest;
    type Signal = PulseSignal;
    type Context = ();

    async fn handle_request(
        &mut self,
        request: PulseRequest,
        _ctx: &(),
        mailbox: &Mailbox<PulseSignal>,
    ) {
        match request {
            PulseRequest::Fire { length } => {
                self.lit = true;
                self.generation += 1;
                self.pending = Some(mailbox.schedule(
                    length,
                    PulseSignal::Off {
                        generation: self.generation,
                    },
                ));
            }
            PulseRequest::Cancel => {
                if let Some(timer) = self.pending.take() {
                    timer.cancel();
                }
            }
            PulseRequest::Fetch { generation, delay } => {
                mailbox.spawn(async move {
                    tokio::time::sleep(delay).await;
                    PulseSignal::Fetched { generation }
                });
            }
            PulseRequest::Snapshot { respond_to } => {
                let _ = respond_to.send((self.lit, self.completed_fetches.clone()));
            }
        }
    }

    async fn handle_signal(&mut self, signal: PulseSignal, _ctx: &(), _: &Mailbox<PulseSignal>) {
        match signal {
            PulseSignal::Off { generation } if generation == self.generation => {
                self.lit = false;
                self.pending = None;
            }
            PulseSignal::Off { .. } => {}
            PulseSignal::Fetched { generation } => self.completed_fetches.push(generation),
        }
    }
}

async fn snapshot(client: &ui_runtime::ComponentClient<Pulse>) -> (bool, Vec<u64>) {
    client
        .call(|respond_to| PulseRequest::Snapshot { respond_to })
        .await
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_timer_signal_is_processed_in_order() {
    let (actor, client) = ComponentActor::new(Pulse::default(), 8);
    let handle = tokio::spawn(actor.run(()));

    client
        .send(PulseRequest::Fire {
            length: Duration::from_millis(300),
        })
        .await
        .unwrap();
    assert!(snapshot(&client).await.0);

    tokio::time::sleep(Duration::from_millis(301)).await;
    assert!(!snapshot(&client).await.0);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_only_latest_timer_acts() {
    let (actor, client) = ComponentActor::new(Pulse::default(), 8);
    tokio::spawn(actor.run(()));

    client
        .send(PulseRequest::Fire {
            length: Duration::from_millis(300),
        })
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    client
        .send(PulseRequest::Fire {
            length: Duration::from_millis(300),
        })
        .await
        .unwrap();

    // First timer fires at 300ms but belongs to an old generation.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(snapshot(&client).await.0);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!snapshot(&client).await.0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_timer_never_fires() {
    let (actor, client) = ComponentActor::new(Pulse::default(), 8);
    tokio::spawn(actor.run(()));

    client
        .send(PulseRequest::Fire {
            length: Duration::from_millis(300),
        })
        .await
        .unwrap();
    client.send(PulseRequest::Cancel).await.unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(snapshot(&client).await.0, "cancelled timer must not switch the pulse off");
}

#[tokio::test(start_paused = true)]
async fn test_requests_are_served_while_work_is_in_flight() {
    let (actor, client) = ComponentActor::new(Pulse::default(), 8);
    tokio::spawn(actor.run(()));

    client
        .send(PulseRequest::Fetch {
            generation: 1,
            delay: Duration::from_secs(5),
        })
        .await
        .unwrap();

    // The loop is not blocked by the pending fetch.
    assert_eq!(snapshot(&client).await.1, Vec::<u64>::new());

    tokio::time::sleep(Duration::from_secs(6)).await;
    assert_eq!(snapshot(&client).await.1, vec![1]);
}

#[tokio::test]
async fn test_actor_stops_when_clients_dropped() {
    let (actor, client) = ComponentActor::new(Pulse::default(), 8);
    let handle = tokio::spawn(actor.run(()));

    let clone = client.clone();
    drop(client);
    assert!(!clone.is_closed());
    drop(clone);

    handle.await.unwrap();
}
