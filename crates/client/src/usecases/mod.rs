pub mod u501_matrix_review;
