use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

use shared_database::provider::{DataProvider, Filter};

use crate::models::{
    AvailabilityStatus, BookingRow, DayAvailability, ScheduleTemplate, SchedulingError,
    SlotAvailability, TemplateLinkRow, EXCLUDED_BOOKING_STATUSES,
};

pub struct AvailabilityService {
    provider: Arc<dyn DataProvider>,
}

impl AvailabilityService {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    /// Day-granularity availability for every day of the given month.
    ///
    /// A day is available iff an active, location-linked template covers its
    /// weekday and no booking exists on that exact date. Any booking closes
    /// the whole day.
    pub async fn month_schedule(
        &self,
        doctor: &str,
        month: &str,
        location: &str,
    ) -> Result<Vec<DayAvailability>, SchedulingError> {
        let first = parse_month(month)?;
        let practitioner = self.resolve_practitioner(doctor).await?;
        let location = self.resolve_location(location).await?;

        debug!(
            "Computing month availability for {} at {} from {}",
            practitioner, location, first
        );

        let templates = self.linked_templates(&practitioner, &location).await?;

        let mut days = Vec::new();
        let mut current = first;
        while current.month() == first.month() {
            let weekday = weekday_name(current.weekday());
            let slot_defined = templates
                .iter()
                .any(|template| template.time_slots.iter().any(|slot| slot.day == weekday));

            let status = if !slot_defined {
                AvailabilityStatus::NotAvailable
            } else if self.booking_count(&practitioner, &location, current).await? == 0 {
                AvailabilityStatus::Available
            } else {
                AvailabilityStatus::NotAvailable
            };

            days.push(DayAvailability {
                date: current,
                status,
            });

            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(days)
    }

    /// Slot-granularity availability for one calendar date.
    ///
    /// Emits every weekday-matching slot across the linked templates in
    /// encounter order; overlapping slots are reported independently, each
    /// checked against the day's bookings on its own.
    pub async fn day_schedule(
        &self,
        doctor: &str,
        date: &str,
        location: &str,
    ) -> Result<Vec<SlotAvailability>, SchedulingError> {
        let target = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            SchedulingError::InvalidArgument(format!(
                "Invalid date format: {}. Expected YYYY-MM-DD",
                date
            ))
        })?;
        let practitioner = self.resolve_practitioner(doctor).await?;
        let location = self.resolve_location(location).await?;

        debug!(
            "Computing slot availability for {} at {} on {}",
            practitioner, location, target
        );

        let templates = self.linked_templates(&practitioner, &location).await?;
        let weekday = weekday_name(target.weekday());

        let mut candidates = Vec::new();
        for template in &templates {
            for slot in &template.time_slots {
                if slot.day == weekday {
                    candidates.push((slot.from_time.normalize()?, slot.to_time.normalize()?));
                }
            }
        }

        if candidates.is_empty() {
            // No slots to report; distinct from "all slots unavailable".
            return Ok(Vec::new());
        }

        let booked = self.booked_ranges(&practitioner, &location, target).await?;

        let slots = candidates
            .into_iter()
            .map(|(start, end)| {
                let taken = booked
                    .iter()
                    .any(|&(booked_start, booked_end)| start < booked_end && end > booked_start);

                SlotAvailability {
                    start_time: start.format("%H:%M").to_string(),
                    end_time: end.format("%H:%M").to_string(),
                    status: if taken {
                        AvailabilityStatus::NotAvailable
                    } else {
                        AvailabilityStatus::Available
                    },
                }
            })
            .collect();

        Ok(slots)
    }

    async fn resolve_practitioner(&self, doctor: &str) -> Result<String, SchedulingError> {
        let id = self
            .provider
            .get_value("practitioners", &[Filter::eq("id", doctor)], "id")
            .await?;

        match id.and_then(|value| value.as_str().map(str::to_string)) {
            Some(id) => Ok(id),
            None => Err(SchedulingError::NotFound(format!(
                "Practitioner '{}' not found",
                doctor
            ))),
        }
    }

    async fn resolve_location(&self, location: &str) -> Result<String, SchedulingError> {
        let id = self
            .provider
            .get_value("locations", &[Filter::eq("id", location)], "id")
            .await?;

        match id.and_then(|value| value.as_str().map(str::to_string)) {
            Some(id) => Ok(id),
            None => Err(SchedulingError::NotFound(format!(
                "Location '{}' not found",
                location
            ))),
        }
    }

    /// Templates linked to this practitioner at this location, excluding
    /// disabled ones. Links without a template reference contribute nothing.
    async fn linked_templates(
        &self,
        practitioner: &str,
        location: &str,
    ) -> Result<Vec<ScheduleTemplate>, SchedulingError> {
        let links = self
            .provider
            .list(
                "template_links",
                &["template"],
                &[
                    Filter::eq("practitioner", practitioner),
                    Filter::eq("location", location),
                ],
            )
            .await?;

        let mut templates = Vec::new();
        for link in links {
            let link: TemplateLinkRow = serde_json::from_value(link)?;
            let Some(template_id) = link.template else {
                continue;
            };
            let Some(record) = self
                .provider
                .get_record("schedule_templates", &template_id)
                .await?
            else {
                continue;
            };
            let template: ScheduleTemplate = serde_json::from_value(record)?;
            if template.disabled {
                continue;
            }
            templates.push(template);
        }

        Ok(templates)
    }

    async fn booking_count(
        &self,
        practitioner: &str,
        location: &str,
        date: NaiveDate,
    ) -> Result<u64, SchedulingError> {
        let count = self
            .provider
            .count("appointments", &booking_filters(practitioner, location, date))
            .await?;
        Ok(count)
    }

    async fn booked_ranges(
        &self,
        practitioner: &str,
        location: &str,
        date: NaiveDate,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>, SchedulingError> {
        let rows = self
            .provider
            .list(
                "appointments",
                &["start_time", "duration"],
                &booking_filters(practitioner, location, date),
            )
            .await?;

        let mut ranges = Vec::with_capacity(rows.len());
        for row in rows {
            let booking: BookingRow = serde_json::from_value(row)?;
            let start = booking.start_time.normalize()?;
            let end = start
                .overflowing_add_signed(Duration::minutes(booking.duration))
                .0;
            ranges.push((start, end));
        }

        Ok(ranges)
    }
}

fn booking_filters(practitioner: &str, location: &str, date: NaiveDate) -> Vec<Filter> {
    vec![
        Filter::eq("practitioner", practitioner),
        Filter::eq("location", location),
        Filter::eq("date", date.format("%Y-%m-%d").to_string()),
        Filter::not_in("status", EXCLUDED_BOOKING_STATUSES),
    ]
}

fn parse_month(month: &str) -> Result<NaiveDate, SchedulingError> {
    let invalid = || {
        SchedulingError::InvalidArgument(format!(
            "Invalid month format: {}. Expected YYYY-MM",
            month
        ))
    };

    let (year, month_num) = month.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month_num, 1).ok_or_else(invalid)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
