//! Dashboard table data derived from rooms and bookings
//!
//! Rooms and bookings come from separate endpoints with no referential
//! guarantee: a booking may point at a room that was removed. Every join
//! here tolerates that.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Booking, Guest, Room};

/// Occupancy derived from bookings only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomStatus {
    Available,
    Reserved,
    Occupied,
}

impl RoomStatus {
    pub fn from_booking(booking: Option<&Booking>) -> Self {
        match booking {
            None => Self::Available,
            Some(b) if b.pay_status => Self::Occupied,
            Some(_) => Self::Reserved,
        }
    }
}

/// Booking joined with its room
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    pub booking: Booking,
    pub room: Room,
}

/// One row per booking whose room exists, in booking order
pub fn join_bookings(rooms: &[Room], bookings: &[Booking]) -> Vec<BookingRow> {
    let by_id: HashMap<i64, &Room> = rooms.iter().map(|r| (r.id, r)).collect();
    bookings
        .iter()
        .filter_map(|b| {
            by_id.get(&b.room_id).map(|room| BookingRow {
                booking: b.clone(),
                room: (*room).clone(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub room: Room,
    pub booking: Option<Booking>,
    pub status: RoomStatus,
}

/// Most recent booking per room: latest check-in, later entries win ties
fn latest_by_room(bookings: &[Booking]) -> HashMap<i64, &Booking> {
    let mut latest: HashMap<i64, &Booking> = HashMap::new();
    for b in bookings {
        latest
            .entry(b.room_id)
            .and_modify(|cur| {
                if b.availability.check_in >= cur.availability.check_in {
                    *cur = b;
                }
            })
            .or_insert(b);
    }
    latest
}

/// One row per room with its latest booking
pub fn room_rows(rooms: &[Room], bookings: &[Booking]) -> Vec<RoomRow> {
    let latest = latest_by_room(bookings);
    rooms
        .iter()
        .map(|room| {
            let booking = latest.get(&room.id).copied();
            RoomRow {
                room: room.clone(),
                booking: booking.cloned(),
                status: RoomStatus::from_booking(booking),
            }
        })
        .collect()
}

/// A room a customer booked; `room_number` is `None` when the room is gone
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRoom {
    pub booking_id: i64,
    pub room_id: i64,
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub guest: Guest,
    /// Room type of the first booking, when its room exists
    pub room_type: Option<String>,
    pub rooms: Vec<CustomerRoom>,
}

/// Group bookings by exact guest email, first-seen order
pub fn group_by_guest(rooms: &[Room], bookings: &[Booking]) -> Vec<CustomerView> {
    let by_id: HashMap<i64, &Room> = rooms.iter().map(|r| (r.id, r)).collect();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut customers: Vec<CustomerView> = Vec::new();

    for b in bookings {
        let room = by_id.get(&b.room_id);
        let entry = CustomerRoom {
            booking_id: b.id,
            room_id: b.room_id,
            room_number: room.map(|r| r.room_number.clone()),
        };

        match index.get(b.guest.email.as_str()) {
            Some(&i) => customers[i].rooms.push(entry),
            None => {
                index.insert(b.guest.email.as_str(), customers.len());
                customers.push(CustomerView {
                    guest: b.guest.clone(),
                    room_type: room.map(|r| r.room_type.name.clone()),
                    rooms: vec![entry],
                });
            }
        }
    }
    customers
}

/// Room whose own availability flag contradicts its bookings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityConflict {
    pub room_id: i64,
    pub room_number: String,
    pub flagged_available: bool,
    pub derived: RoomStatus,
}

/// Report, never reconcile, disagreements between the two sources
pub fn availability_disagreements(rooms: &[Room], bookings: &[Booking]) -> Vec<AvailabilityConflict> {
    room_rows(rooms, bookings)
        .into_iter()
        .filter(|row| row.room.is_available != (row.status == RoomStatus::Available))
        .map(|row| AvailabilityConflict {
            room_id: row.room.id,
            room_number: row.room.room_number,
            flagged_available: row.room.is_available,
            derived: row.status,
        })
        .collect()
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total: usize,
    pub paid: usize,
    pub unpaid: usize,
    /// Sum of amounts over paid bookings
    pub revenue: Decimal,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut acc, b| {
            acc.total += 1;
            if b.pay_status {
                acc.paid += 1;
                acc.revenue += b.payment.amount;
            } else {
                acc.unpaid += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{Availability, Payment, RoomType};

    fn room(id: i64, number: &str, available: bool) -> Room {
        Room {
            id,
            room_number: number.to_string(),
            room_type: RoomType {
                id: 1,
                name: if id % 2 == 0 { "Deluxe" } else { "Standard" }.to_string(),
                description: String::new(),
                base_price: Decimal::new(100, 0),
                reservation_fee_percentage: Decimal::TEN,
            },
            price: Decimal::new(100, 0),
            is_available: available,
        }
    }

    fn booking(id: i64, room_id: i64, email: &str, day: u32, paid: bool) -> Booking {
        let check_in = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
        Booking {
            id,
            room_id,
            guest: Guest {
                name: format!("Guest {}", id),
                email: email.to_string(),
                phone: String::new(),
            },
            availability: Availability {
                check_in,
                check_out: check_in + chrono::Duration::days(1),
                adults: 1,
                children: 0,
                extra_requests: None,
            },
            payment: Payment {
                amount: Decimal::new(100, 0),
                ..Payment::default()
            },
            pay_status: paid,
        }
    }

    #[test]
    fn test_join_drops_dangling_and_keeps_order() {
        let rooms = vec![room(1, "101", true), room(2, "102", true)];
        let bookings = vec![
            booking(10, 2, "a@x.com", 1, false),
            booking(11, 99, "b@x.com", 2, false),
            booking(12, 1, "c@x.com", 3, false),
        ];
        let rows = join_bookings(&rooms, &bookings);
        let ids: Vec<i64> = rows.iter().map(|r| r.booking.id).collect();
        assert_eq!(ids, vec![10, 12]);
        assert_eq!(rows[0].room.room_number, "102");
    }

    #[test]
    fn test_room_status_derivation() {
        let rooms = vec![room(1, "101", true), room(2, "102", true), room(3, "103", true)];
        let bookings = vec![
            booking(1, 2, "a@x.com", 1, false),
            booking(2, 3, "b@x.com", 1, false),
            booking(3, 3, "b@x.com", 5, true),
        ];
        let rows = room_rows(&rooms, &bookings);
        assert_eq!(rows[0].status, RoomStatus::Available);
        assert_eq!(rows[1].status, RoomStatus::Reserved);
        assert_eq!(rows[2].status, RoomStatus::Occupied);
        assert_eq!(rows[2].booking.as_ref().unwrap().id, 3);
    }

    #[test]
    fn test_group_by_guest_first_seen_wins() {
        let rooms = vec![room(1, "101", true), room(2, "102", true)];
        let mut later = booking(3, 2, "ana@x.com", 9, false);
        later.guest.name = "Ana (updated)".to_string();
        let bookings = vec![
            booking(1, 1, "ana@x.com", 1, false),
            booking(2, 2, "bo@x.com", 2, false),
            later,
            booking(4, 42, "ana@x.com", 10, false),
        ];

        let customers = group_by_guest(&rooms, &bookings);
        assert_eq!(customers.len(), 2);

        let ana = &customers[0];
        assert_eq!(ana.guest.name, "Guest 1");
        assert_eq!(ana.room_type.as_deref(), Some("Standard"));
        let numbers: Vec<Option<&str>> =
            ana.rooms.iter().map(|r| r.room_number.as_deref()).collect();
        assert_eq!(numbers, vec![Some("101"), Some("102"), None]);
    }

    #[test]
    fn test_group_by_guest_email_is_case_sensitive() {
        let rooms = vec![room(1, "101", true)];
        let bookings = vec![
            booking(1, 1, "Ana@x.com", 1, false),
            booking(2, 1, "ana@x.com", 2, false),
        ];
        assert_eq!(group_by_guest(&rooms, &bookings).len(), 2);
    }

    #[test]
    fn test_availability_disagreements() {
        let rooms = vec![
            room(1, "101", true),  // booked but flagged available
            room(2, "102", false), // free but flagged unavailable
            room(3, "103", true),  // consistent
            room(4, "104", false), // consistent
        ];
        let bookings = vec![
            booking(1, 1, "a@x.com", 1, true),
            booking(2, 4, "b@x.com", 1, false),
        ];
        let conflicts = availability_disagreements(&rooms, &bookings);
        let ids: Vec<i64> = conflicts.iter().map(|c| c.room_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(conflicts[0].derived, RoomStatus::Occupied);
        assert_eq!(conflicts[1].derived, RoomStatus::Available);
    }

    #[test]
    fn test_booking_stats() {
        let bookings = vec![
            booking(1, 1, "a@x.com", 1, true),
            booking(2, 1, "a@x.com", 2, false),
            booking(3, 1, "a@x.com", 3, true),
        ];
        let stats = BookingStats::from_bookings(&bookings);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.paid, 2);
        assert_eq!(stats.unpaid, 1);
        assert_eq!(stats.revenue, Decimal::new(200, 0));
    }
}
