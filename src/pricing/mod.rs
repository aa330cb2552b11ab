pub mod tariff;
pub mod itinerary;

pub use tariff::{apply_tariff, final_cost, round_half_up, Carrier, PriceBreakdown};
pub use itinerary::{
    carrier_graph, par_price_itineraries, price_carrier, price_itineraries, rank_itineraries,
    CarrierItinerary, DestinationPrice,
};
