//! Database entities module

pub mod city;
pub mod city_edge;
pub mod hotel;
pub mod reservation;
