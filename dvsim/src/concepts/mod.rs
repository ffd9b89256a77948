pub mod neighbour;
pub mod network;
pub mod packet;
pub mod route;
