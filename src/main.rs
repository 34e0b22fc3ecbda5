use tracing::{info, info_span, Instrument};

use cinema_reservations::app_system::{setup_tracing, AppError, CinemaSystem, SystemConfig};
use cinema_reservations::domain::{Movie, RoomCreate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = SystemConfig::from_env();
    setup_tracing(&config);

    info!("Starting cinema reservation demo");

    let mut system = CinemaSystem::new(&config);

    // Register users
    let juan_id = system.registry.register_user("Juan Perez", "juan@example.com", "123456789")?;
    println!("User Juan Perez registered successfully.");
    system.registry.register_user("Maria Lopez", "maria@example.com", "987654321")?;
    println!("User Maria Lopez registered successfully.");

    // Register employees
    let admin_id = system
        .registry
        .register_employee("Admin", "admin@cine.com", "111111111", "Taquillero", 2000.0)?;
    println!("Employee Admin registered successfully.");
    system
        .registry
        .register_employee("Limpieza", "limpieza@cine.com", "222222222", "Limpieza", 1500.0)?;
    println!("Employee Limpieza registered successfully.");

    // Promote the box office clerk
    let admin = system.registry.employee_mut(&admin_id)?;
    println!("\nBefore the role change:\n{}", admin);
    admin.change_role("Administrator");
    println!("The role of {} has been changed to {}.", admin.person.name, admin.role());
    println!("\nAfter the role change:\n{}", admin);

    let movie = Movie::new("Inception", 148, "PG-13", "Science Fiction", "Christopher Nolan");
    println!("\nMovie: {}", movie);

    let room = system.open_room(RoomCreate::new("Sala 1", 100, "IMAX")).await?;

    // Only an administrator may schedule; anyone else aborts the demo here.
    let screening = system
        .registry
        .employee(&admin_id)?
        .create_screening(movie, &room, "20:00")?;
    println!("\nScreening added: {}", screening);

    let juan = system.registry.user_mut(&juan_id)?;
    let reservation = juan
        .reserve_seats(&screening, [1, 2, 3])
        .instrument(info_span!("reservation"))
        .await?;
    match reservation {
        Some(reservation) => println!("\nReservation successful: {}", reservation),
        None => println!("\nCould not complete the reservation."),
    }

    println!("\nReservations of {}:", juan);
    println!("{}", juan.list_reservations());

    let free = room.available_seats().await?.len();
    info!(room = %room.name(), free, "Seats left");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
