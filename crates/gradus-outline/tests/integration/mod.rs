mod builtin_outline;
mod round_trip;
