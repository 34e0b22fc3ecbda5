use std::collections::BTreeSet;

use crate::app_system::{CinemaSystem, SystemConfig};
use crate::domain::{Movie, Person, RoomCreate, SeatNumber, User};
use crate::error::EmployeeError;
use crate::room_actor::RoomError;

fn inception() -> Movie {
    Movie::new("Inception", 148, "PG-13", "Science Fiction", "Christopher Nolan")
}

#[tokio::test]
async fn test_box_office_scenario() {
    let mut system = CinemaSystem::new(&SystemConfig::default());

    let juan_id = system
        .registry
        .register_user("Juan Perez", "juan@example.com", "123456789")
        .unwrap();
    let maria_id = system
        .registry
        .register_user("Maria Lopez", "maria@example.com", "987654321")
        .unwrap();
    let admin_id = system
        .registry
        .register_employee("Admin", "admin@cine.com", "111111111", "Taquillero", 2000.0)
        .unwrap();

    let room = system.open_room(RoomCreate::new("Sala 1", 100, "IMAX")).await.unwrap();

    // Still a cashier at this point.
    let denied = system
        .registry
        .employee(&admin_id)
        .unwrap()
        .create_screening(inception(), &room, "20:00");
    assert!(matches!(denied, Err(EmployeeError::PermissionDenied { .. })));

    system.registry.employee_mut(&admin_id).unwrap().change_role("Administrator");
    let screening = system
        .registry
        .employee(&admin_id)
        .unwrap()
        .create_screening(inception(), &room, "20:00")
        .unwrap();

    let juan = system.registry.user_mut(&juan_id).unwrap();
    assert_eq!(juan.to_string(), "Juan Perez (juan@example.com)");
    assert_eq!(juan.list_reservations(), "You have no reservations.");
    let reservation = juan
        .reserve_seats(&screening, [1, 2, 3])
        .await
        .unwrap()
        .expect("seats 1-3 should be free");
    assert_eq!(reservation.seats(), &[1, 2, 3].into_iter().collect::<BTreeSet<SeatNumber>>());
    assert_eq!(reservation.user_id(), &juan_id);
    assert_eq!(
        reservation.to_string(),
        "Reservation for Juan Perez to Inception in Sala 1, Seats: [1, 2, 3]"
    );
    assert_eq!(juan.reservations().len(), 1);

    let available = room.available_seats().await.unwrap();
    assert_eq!(available.len(), 97);
    assert!(available.is_disjoint(&[1, 2, 3].into_iter().collect()));

    let maria = system.registry.user_mut(&maria_id).unwrap();
    let second = maria.reserve_seats(&screening, [1]).await.unwrap();
    assert!(second.is_none());
    assert!(maria.reservations().is_empty());
    assert_eq!(room.available_seats().await.unwrap(), available);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_screenings_in_one_room_share_seats() {
    let mut system = CinemaSystem::new(&SystemConfig::default());
    let admin_id = system
        .registry
        .register_employee("Boss", "boss@cine.com", "1", "Administrator", 3000.0)
        .unwrap();
    let user_id = system.registry.register_user("Ana", "ana@example.com", "2").unwrap();
    let room = system.open_room(RoomCreate::new("Sala 2", 4, "2D")).await.unwrap();

    let admin = system.registry.employee(&admin_id).unwrap();
    let matinee = admin.create_screening(inception(), &room, "16:00").unwrap();
    let evening = admin.create_screening(inception(), &room, "22:00").unwrap();

    let ana = system.registry.user_mut(&user_id).unwrap();
    assert!(ana.reserve_seats(&matinee, [1, 2]).await.unwrap().is_some());
    assert!(ana.reserve_seats(&evening, [2, 3]).await.unwrap().is_none());
    assert!(ana.reserve_seats(&evening, [3, 4]).await.unwrap().is_some());

    assert_eq!(ana.list_reservations().lines().count(), 2);
    let showtimes: Vec<&str> = ana
        .reservations()
        .iter()
        .map(|reservation| reservation.screening().showtime.as_str())
        .collect();
    assert_eq!(showtimes, vec!["16:00", "22:00"]);

    let snapshot = room.snapshot().await.unwrap();
    assert_eq!(snapshot.available_count(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_seat_request_records_reservation() {
    let mut system = CinemaSystem::new(&SystemConfig::default());
    let admin_id = system
        .registry
        .register_employee("Boss", "boss@cine.com", "1", "Administrator", 3000.0)
        .unwrap();
    let user_id = system.registry.register_user("Ana", "ana@example.com", "2").unwrap();
    let room = system.open_room(RoomCreate::new("Sala 5", 10, "2D")).await.unwrap();
    let screening = system
        .registry
        .employee(&admin_id)
        .unwrap()
        .create_screening(inception(), &room, "20:00")
        .unwrap();

    let ana = system.registry.user_mut(&user_id).unwrap();
    let reservation = ana
        .reserve_seats(&screening, Vec::<SeatNumber>::new())
        .await
        .unwrap()
        .expect("an empty request always succeeds");
    assert!(reservation.seats().is_empty());
    assert_eq!(reservation.to_string(), "Reservation for Ana to Inception in Sala 5, Seats: []");
    assert_eq!(ana.reservations().len(), 1);
    assert_eq!(room.available_seats().await.unwrap().len(), 10);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_room_is_rejected() {
    let system = CinemaSystem::new(&SystemConfig::default());
    let result = system.open_room(RoomCreate::new("Closet", 0, "2D")).await;
    assert!(matches!(result, Err(RoomError::InvalidRoom(_))));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_handles_fail_after_shutdown() {
    let system = CinemaSystem::new(&SystemConfig::default());
    let room = system.open_room(RoomCreate::new("Sala 3", 10, "2D")).await.unwrap();
    system.shutdown().await.unwrap();

    let result = room.reserve_seats(&[1].into_iter().collect()).await;
    assert!(matches!(result, Err(RoomError::ActorCommunicationError(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_never_share_a_seat() {
    const CAPACITY: SeatNumber = 12;

    let mut system = CinemaSystem::new(&SystemConfig::default());
    let admin_id = system
        .registry
        .register_employee("Boss", "boss@cine.com", "1", "Administrator", 3000.0)
        .unwrap();
    let room = system.open_room(RoomCreate::new("Sala 4", CAPACITY, "2D")).await.unwrap();
    let screening = system
        .registry
        .employee(&admin_id)
        .unwrap()
        .create_screening(inception(), &room, "20:00")
        .unwrap();

    let mut tasks = Vec::new();
    for n in 0..40u32 {
        let screening = screening.clone();
        let mut user = User::new(
            format!("user_{}", n),
            Person::new(format!("Guest {}", n), format!("guest{}@example.com", n), "0"),
        );
        let first = n % CAPACITY + 1;
        let second = (n + 1) % CAPACITY + 1;
        tasks.push(tokio::spawn(async move {
            user.reserve_seats(&screening, [first, second]).await
        }));
    }

    let mut granted: BTreeSet<SeatNumber> = BTreeSet::new();
    for task in tasks {
        if let Some(reservation) = task.await.unwrap().unwrap() {
            assert!(reservation.seats().is_disjoint(&granted));
            granted.extend(reservation.seats().iter().copied());
        }
    }

    let available = room.available_seats().await.unwrap();
    assert!(available.is_disjoint(&granted));
    let union: BTreeSet<SeatNumber> = available.union(&granted).copied().collect();
    let full: BTreeSet<SeatNumber> = (1..=CAPACITY).collect();
    assert_eq!(union, full);

    system.shutdown().await.unwrap();
}
