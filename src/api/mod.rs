mod chess_com;

pub use chess_com::ChessComClient;
