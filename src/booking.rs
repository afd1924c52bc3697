use crate::fetch::BASE_URL;
use crate::model::Fare;
use crate::query::DATE_FORMAT;

// `fr-FR`, `fr_FR.UTF-8` and `fr_FR@euro` all become `fr/fr`.
fn locale_path(locale: &str) -> String {
    let tag = locale.split(['.', '@']).next().unwrap_or_default();
    let tag = tag.trim().replace('_', "-").to_lowercase();
    match tag.split_once('-') {
        Some((lang, region)) if !lang.is_empty() && !region.is_empty() => {
            format!("{lang}/{region}")
        }
        _ if !tag.is_empty() => format!("{tag}/{tag}"),
        _ => "en/gb".to_string(),
    }
}

pub fn booking_url(fare: &Fare, locale: &str) -> String {
    let locale_path = locale_path(locale);
    let origin = &fare.outbound.departure_airport.iata_code;
    let destination = &fare.outbound.arrival_airport.iata_code;
    let date_out = fare.outbound.departure_date.format(DATE_FORMAT);
    let date_in = fare.inbound.departure_date.format(DATE_FORMAT);

    format!(
        "{BASE_URL}/{locale_path}/trip/flights/select?adults=1&children=0&infants=0&teens=0\
         &tpAdults=1&tpChildren=0&tpInfants=0&tpTeens=0\
         &dateOut={date_out}&tpStartDate={date_out}&dateIn={date_in}&tpEndDate={date_in}\
         &isReturn=true&discount=0&tpDiscount=0\
         &originIata={origin}&destinationIata={destination}\
         &tpOriginIata={origin}&tpDestinationIata={destination}"
    )
}
