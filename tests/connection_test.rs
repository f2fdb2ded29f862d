use doctor_network::dto::connection_dto::{
    ConnectionAction, ConnectionRequestListResponse, RespondConnectionPayload,
    SendConnectionPayload,
};
use doctor_network::models::connection::{
    ConnectionRequest, ConnectionRequestStatus, ConnectionState, ConnectionStatus,
};
use doctor_network::models::doctor_profile::DoctorProfile;
use doctor_network::utils::validation::parse_payload;
use doctor_network::Error;
use serde_json::json;
use uuid::Uuid;

fn profile(name: &str) -> DoctorProfile {
    DoctorProfile {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        full_name: name.to_string(),
        specialty: "Cardiology".to_string(),
        experience_years: 12,
        hospital_affiliations: vec!["St. Mary's".to_string()],
        email: None,
        phone: None,
        location: None,
        avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        bio: None,
        interests: vec![],
        education: vec![],
        is_public: true,
        connection_count: 0,
        follower_count: 0,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn new_request_denormalizes_sender_and_is_pending() {
    let sender = profile("Dr. Ada");
    let receiver = Uuid::new_v4();

    let request =
        ConnectionRequest::new(&sender, receiver, Some("  Let's connect  ".to_string())).unwrap();

    assert_eq!(request.sender_id, sender.user_id);
    assert_eq!(request.receiver_id, receiver);
    assert_eq!(request.sender_name, "Dr. Ada");
    assert_eq!(request.sender_specialty.as_deref(), Some("Cardiology"));
    assert_eq!(request.message.as_deref(), Some("Let's connect"));
    assert_eq!(request.status, ConnectionRequestStatus::Pending);
    assert!(request.responded_at.is_none());
}

#[test]
fn request_to_self_is_rejected() {
    let sender = profile("Dr. Ada");
    let err = ConnectionRequest::new(&sender, sender.user_id, None).unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
}

#[test]
fn receiver_can_accept_once() {
    let sender = profile("Dr. Ada");
    let receiver = Uuid::new_v4();
    let mut request = ConnectionRequest::new(&sender, receiver, None).unwrap();

    request.accept(receiver).unwrap();
    assert_eq!(request.status, ConnectionRequestStatus::Accepted);
    assert!(request.responded_at.is_some());

    let err = request.reject(receiver).unwrap_err();
    assert!(matches!(err, Error::InvalidTransition(_)));
    assert_eq!(request.status, ConnectionRequestStatus::Accepted);
}

#[test]
fn only_receiver_may_respond() {
    let sender = profile("Dr. Ada");
    let mut request = ConnectionRequest::new(&sender, Uuid::new_v4(), None).unwrap();

    let err = request.accept(sender.user_id).unwrap_err();
    assert!(matches!(err, Error::Unauthorized(_)));
    assert!(request.is_pending());
}

#[test]
fn status_for_reflects_viewer_side() {
    let sender = profile("Dr. Ada");
    let receiver = Uuid::new_v4();
    let mut request = ConnectionRequest::new(&sender, receiver, None).unwrap();

    assert_eq!(request.status_for(sender.user_id), ConnectionStatus::pending(false));
    assert!(request.status_for(receiver).can_respond());
    assert_eq!(request.status_for(Uuid::new_v4()), ConnectionStatus::none());

    request.reject(receiver).unwrap();
    assert_eq!(request.status_for(receiver).status, ConnectionState::None);
}

#[test]
fn respond_payload_drives_transition() {
    let sender = profile("Dr. Ada");
    let receiver = Uuid::new_v4();
    let mut request = ConnectionRequest::new(&sender, receiver, None).unwrap();

    let payload: RespondConnectionPayload =
        serde_json::from_value(json!({ "action": "accept" })).unwrap();
    assert_eq!(payload.action, ConnectionAction::Accept);
    payload.apply(&mut request, receiver).unwrap();

    assert_eq!(request.status_for(sender.user_id), ConnectionStatus::connected());
}

#[test]
fn send_payload_limits_message_length() {
    let receiver = Uuid::new_v4();
    let ok = json!({ "receiverId": receiver, "message": "Hello" }).to_string();
    let payload: SendConnectionPayload = parse_payload(&ok).unwrap();
    assert_eq!(payload.receiver_id, receiver);

    let long = json!({ "receiverId": receiver, "message": "x".repeat(301) }).to_string();
    let err = parse_payload::<SendConnectionPayload>(&long).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = parse_payload::<SendConnectionPayload>("{\"message\": 1}").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn request_wire_shape_is_camel_case() {
    let sender = profile("Dr. Ada");
    let request = ConnectionRequest::new(&sender, Uuid::new_v4(), None).unwrap();

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["status"], "pending");
    assert_eq!(value["senderName"], "Dr. Ada");
    assert!(value.get("receiverId").is_some());

    let status = serde_json::to_value(ConnectionStatus::pending(true)).unwrap();
    assert_eq!(status, json!({ "status": "pending", "isIncoming": true }));
}

#[test]
fn list_response_counts_pending() {
    let sender = profile("Dr. Ada");
    let receiver = Uuid::new_v4();
    let mut answered = ConnectionRequest::new(&sender, receiver, None).unwrap();
    answered.reject(receiver).unwrap();
    let pending = ConnectionRequest::new(&sender, receiver, None).unwrap();

    let list = ConnectionRequestListResponse::from(vec![answered, pending]);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.pending_count, 1);
}

#[test]
fn send_payload_opens_request_within_message_limit() {
    let sender = profile("Dr. Ada");
    let receiver = Uuid::new_v4();

    let payload = SendConnectionPayload {
        receiver_id: receiver,
        message: Some("Met you at the cardiology summit".to_string()),
    };
    let request = payload.into_request(&sender).unwrap();
    assert_eq!(request.receiver_id, receiver);
    assert!(request.is_pending());

    let too_long = SendConnectionPayload {
        receiver_id: receiver,
        message: Some("x".repeat(301)),
    };
    let err = too_long.into_request(&sender).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let to_self = SendConnectionPayload {
        receiver_id: sender.user_id,
        message: None,
    };
    assert!(matches!(to_self.into_request(&sender), Err(Error::BadRequest(_))));
}
