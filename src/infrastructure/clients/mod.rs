pub(crate) mod rankings;
