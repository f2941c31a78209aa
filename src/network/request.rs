use crossbeam_channel as cbc;
use serde;

use crate::elevator::elevator_info::CallDirection;
use crate::order_assigner::order_assigner::Dispatcher;
use crate::util::error::DispatchError;

/// A request arriving from outside. Requests are fire-and-forget: accepting one
/// only means it was queued, not that a car was assigned.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Hall call from a floor.
    #[serde(rename_all = "camelCase")]
    CallElevator { floor: i32, direction: CallDirection },
    /// Floor picked inside a car.
    #[serde(rename_all = "camelCase")]
    SelectFloor { elevator_id: i32, floor: i32 },
}

pub fn handle_request(dispatcher: &Dispatcher, request: Request) -> Result<(), DispatchError> {
    match request {
        Request::CallElevator { floor, direction } => dispatcher.assign(floor, direction).map(|_| ()),
        Request::SelectFloor { elevator_id, floor } => dispatcher.enqueue_selection(elevator_id, floor),
    }
}

/// Feeds every request from `requests` to the dispatcher until all senders are gone.
///
/// Rejected requests are dropped; the dispatcher has already logged why.
pub fn request_handler(dispatcher: Dispatcher, requests: cbc::Receiver<Request>) {
    for request in requests.iter() {
        log::debug!("Handling {:?}", request);
        let _ = handle_request(&dispatcher, request);
    }
    log::debug!("Request channel closed");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::order_assigner::cost_function::Penalties;
    use crate::simulation::fleet::SharedFleet;
    use std::thread;

    #[test]
    fn it_decodes_a_call() {
        let request: Request =
            serde_json::from_str(r#"{"type":"CallElevator","floor":5,"direction":"UP"}"#).unwrap();
        assert_eq!(
            request,
            Request::CallElevator { floor: 5, direction: CallDirection::Up }
        );
    }

    #[test]
    fn it_decodes_a_selection() {
        let request: Request =
            serde_json::from_str(r#"{"type":"SelectFloor","elevatorId":1,"floor":3}"#).unwrap();
        assert_eq!(request, Request::SelectFloor { elevator_id: 1, floor: 3 });
    }

    #[test]
    fn it_refuses_an_idle_call() {
        let r = serde_json::from_str::<Request>(r#"{"type":"CallElevator","floor":5,"direction":"IDLE"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn it_routes_requests_to_the_dispatcher() {
        let fleet = SharedFleet::new(2, 9);
        let dispatcher = Dispatcher::new(fleet.clone(), Penalties::default());
        handle_request(&dispatcher, Request::CallElevator { floor: 4, direction: CallDirection::Down }).unwrap();
        handle_request(&dispatcher, Request::SelectFloor { elevator_id: 1, floor: 8 }).unwrap();
        let elevators = fleet.elevators();
        assert!(elevators[0].target_floors.contains(4));
        assert!(elevators[1].target_floors.contains(8));
    }

    #[test]
    fn it_keeps_handling_after_a_bad_request() {
        let fleet = SharedFleet::new(2, 9);
        let dispatcher = Dispatcher::new(fleet.clone(), Penalties::default());
        let (tx, rx) = cbc::unbounded::<Request>();
        let handler = thread::spawn(move || request_handler(dispatcher, rx));

        tx.send(Request::SelectFloor { elevator_id: 7, floor: 2 }).unwrap();
        tx.send(Request::CallElevator { floor: 42, direction: CallDirection::Up }).unwrap();
        tx.send(Request::SelectFloor { elevator_id: 1, floor: 2 }).unwrap();
        drop(tx);
        handler.join().unwrap();

        let elevators = fleet.elevators();
        assert!(elevators[0].target_floors.is_empty());
        assert_eq!(elevators[1].target_floors.iter().collect::<Vec<_>>(), vec![2]);
    }
}
