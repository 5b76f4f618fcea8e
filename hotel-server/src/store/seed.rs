//! 初始数据
//!
//! 服务启动时载入的演示数据，重启即恢复。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{Account, Availability, Booking, Guest, Payment, Role, Room, RoomType};

pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: 1,
            username: "admin".to_string(),
            email: "admin@hotel.local".to_string(),
            password: "admin123".to_string(),
            first_name: "Hotel".to_string(),
            last_name: "Admin".to_string(),
            role: Role::Admin,
        },
        Account {
            id: 2,
            username: "reception".to_string(),
            email: "reception@hotel.local".to_string(),
            password: "reception123".to_string(),
            first_name: "Front".to_string(),
            last_name: "Desk".to_string(),
            role: Role::User,
        },
    ]
}

pub fn room_types() -> Vec<RoomType> {
    vec![
        RoomType {
            id: 1,
            name: "Standard".to_string(),
            description: "Double bed, city view".to_string(),
            base_price: Decimal::new(8000, 2),
            reservation_fee_percentage: Decimal::TEN,
        },
        RoomType {
            id: 2,
            name: "Deluxe".to_string(),
            description: "King bed, balcony".to_string(),
            base_price: Decimal::new(12000, 2),
            reservation_fee_percentage: Decimal::new(15, 0),
        },
        RoomType {
            id: 3,
            name: "Suite".to_string(),
            description: "Separate living room, sea view".to_string(),
            base_price: Decimal::new(22000, 2),
            reservation_fee_percentage: Decimal::new(20, 0),
        },
    ]
}

/// 每个房型三间房，房号 `{楼层}0{序号}`
pub fn rooms(room_types: &[RoomType]) -> Vec<Room> {
    let mut rooms = Vec::new();
    let mut id = 1;
    for (floor, room_type) in room_types.iter().enumerate() {
        for n in 1..=3 {
            rooms.push(Room {
                id,
                room_number: format!("{}0{}", floor + 1, n),
                room_type: room_type.clone(),
                price: room_type.base_price,
                is_available: true,
            });
            id += 1;
        }
    }
    rooms
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 1,
            room_id: 1,
            guest: Guest {
                name: "Lucía Gómez".to_string(),
                email: "lucia@example.com".to_string(),
                phone: "+34 600 111 222".to_string(),
            },
            availability: Availability {
                check_in: date(2026, 11, 2),
                check_out: date(2026, 11, 5),
                adults: 2,
                children: 0,
                extra_requests: None,
            },
            payment: Payment {
                method: "card".to_string(),
                amount: Decimal::new(24000, 2),
                reservation_fee: Decimal::new(2400, 2),
                transaction_id: Some("txn-0001".to_string()),
                paid_at: Some(1_761_000_000_000),
            },
            pay_status: true,
        },
        Booking {
            id: 2,
            room_id: 4,
            guest: Guest {
                name: "Lucía Gómez".to_string(),
                email: "lucia@example.com".to_string(),
                phone: "+34 600 111 222".to_string(),
            },
            availability: Availability {
                check_in: date(2026, 12, 20),
                check_out: date(2026, 12, 23),
                adults: 2,
                children: 1,
                extra_requests: Some("Extra bed".to_string()),
            },
            payment: Payment::default(),
            pay_status: false,
        },
        Booking {
            id: 3,
            room_id: 7,
            guest: Guest {
                name: "Tom Becker".to_string(),
                email: "tom@example.com".to_string(),
                phone: "+49 151 000 000".to_string(),
            },
            availability: Availability {
                check_in: date(2026, 11, 10),
                check_out: date(2026, 11, 12),
                adults: 1,
                children: 0,
                extra_requests: None,
            },
            payment: Payment::default(),
            pay_status: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_admin() {
        let admin = accounts().into_iter().find(|a| a.username == "admin").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.password, "admin123");
    }

    #[test]
    fn test_seed_bookings_reference_seed_rooms() {
        let rooms = rooms(&room_types());
        for booking in bookings() {
            assert!(rooms.iter().any(|r| r.id == booking.room_id));
            assert!(booking.availability.ensure_ordered().is_ok());
        }
    }
}
