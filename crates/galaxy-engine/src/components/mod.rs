pub mod comet;
pub mod particle;
pub mod star;
pub mod trail;
