use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::catalog::Room;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_GUESTS: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please choose a check-in date")]
    MissingCheckIn,
    #[error("Please choose a check-out date")]
    MissingCheckOut,
    #[error("Check-in can't be in the past")]
    CheckInInPast,
    #[error("Check-out must be on or after check-in")]
    CheckOutBeforeCheckIn,
    #[error("This stay takes between 1 and {capacity} guests")]
    GuestsOutOfRange { capacity: u32 },
}

/// A validated stay request. Only lives long enough to be acknowledged.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl fmt::Display for BookingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking request submitted for {}\nCheck-in: {}\nCheck-out: {}\nGuests: {}",
            self.room_name,
            self.check_in.format(DATE_FORMAT),
            self.check_out.format(DATE_FORMAT),
            self.guests
        )
    }
}

pub fn guest_options(capacity: u32) -> RangeInclusive<u32> {
    1..=capacity
}

pub fn guest_label(count: u32) -> String {
    if count == 1 {
        "1 Guest".to_string()
    } else {
        format!("{} Guests", count)
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Earliest check-out the form offers: the chosen check-in, or today.
pub fn min_check_out(check_in: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    check_in.unwrap_or(today)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
}

impl BookingDraft {
    pub fn new(capacity: u32) -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: DEFAULT_GUESTS.clamp(1, capacity.max(1)),
        }
    }

    /// Past dates are refused. A check-out that no longer fits is cleared.
    pub fn set_check_in(&mut self, date: Option<NaiveDate>, today: NaiveDate) {
        self.check_in = date.filter(|d| *d >= today);
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out < check_in {
                self.check_out = None;
            }
        }
    }

    pub fn set_check_out(&mut self, date: Option<NaiveDate>, today: NaiveDate) {
        let earliest = min_check_out(self.check_in, today);
        self.check_out = date.filter(|d| *d >= earliest);
    }

    /// Out of range counts are ignored; the select only offers valid ones.
    pub fn set_guests(&mut self, guests: u32, capacity: u32) {
        if guest_options(capacity).contains(&guests) {
            self.guests = guests;
        }
    }

    pub fn submit(&self, room: &Room, today: NaiveDate) -> Result<BookingRequest, BookingError> {
        let check_in = self.check_in.ok_or(BookingError::MissingCheckIn)?;
        let check_out = self.check_out.ok_or(BookingError::MissingCheckOut)?;

        if check_in < today {
            return Err(BookingError::CheckInInPast);
        }
        if check_out < check_in {
            return Err(BookingError::CheckOutBeforeCheckIn);
        }
        if !guest_options(room.capacity).contains(&self.guests) {
            return Err(BookingError::GuestsOutOfRange { capacity: room.capacity });
        }

        Ok(BookingRequest {
            room_name: room.name.clone(),
            check_in,
            check_out,
            guests: self.guests,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub room: Room,
    pub on_close: Callback<()>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let today = *use_state(|| Local::now().date_naive());
    let capacity = props.room.capacity;
    let draft = use_state(|| BookingDraft::new(capacity));
    let error = use_state(|| None::<BookingError>);

    let on_check_in = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set_check_in(parse_date(&input.value()), today);
            draft.set(next);
        })
    };

    let on_check_out = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set_check_out(parse_date(&input.value()), today);
            draft.set(next);
        })
    };

    let on_guests = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(guests) = select.value().parse::<u32>() {
                let mut next = (*draft).clone();
                next.set_guests(guests, capacity);
                draft.set(next);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let room = props.room.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.submit(&room, today) {
                Ok(request) => {
                    log::info!("Booking request for {} ({} guests)", request.room_name, request.guests);
                    if let Some(window) = window() {
                        if let Err(err) = window.alert_with_message(&request.to_string()) {
                            log::warn!("Failed to show booking confirmation: {:?}", err);
                        }
                    }
                    error.set(None);
                    on_close.emit(());
                }
                Err(err) => {
                    log::warn!("Booking request rejected: {}", err);
                    error.set(Some(err));
                }
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let today_str = today.format(DATE_FORMAT).to_string();
    let check_out_min = min_check_out(draft.check_in, today).format(DATE_FORMAT).to_string();
    let date_value = |d: Option<NaiveDate>| d.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default();

    html! {
        <div class="booking-modal-overlay" onclick={close.clone()}>
            <div class="booking-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="close-modal-btn" onclick={close}>{"✕"}</button>
                <h2>{format!("Book {}", props.room.name)}</h2>
                <form onsubmit={on_submit} class="booking-form">
                    <div class="form-group">
                        <label>{"Check-in Date"}</label>
                        <input
                            type="date"
                            value={date_value(draft.check_in)}
                            onchange={on_check_in}
                            required=true
                            min={today_str}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Check-out Date"}</label>
                        <input
                            type="date"
                            value={date_value(draft.check_out)}
                            onchange={on_check_out}
                            required=true
                            min={check_out_min}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Number of Guests"}</label>
                        <select onchange={on_guests}>
                            {
                                for guest_options(capacity).map(|n| html! {
                                    <option key={n} value={n.to_string()} selected={n == draft.guests}>
                                        {guest_label(n)}
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="booking-summary">
                        <p>{"Price per night: "}<strong>{format!("₹{}", props.room.price)}</strong></p>
                    </div>
                    {
                        if let Some(err) = (*error).as_ref() {
                            html! { <p class="booking-error">{err.to_string()}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="btn btn-primary submit-booking-btn">
                        {"Confirm Booking"}
                    </button>
                </form>
            </div>
        </div>
    }
}
