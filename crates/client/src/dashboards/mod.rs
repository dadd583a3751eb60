pub mod d400_project_cards;
pub mod d401_user_directory;
