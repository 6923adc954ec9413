// Tags every listed message with its schema revision and record kind.
macro_rules! versioned {
    ($version:expr, $($msg:ty => $kind:ident),+ $(,)?) => {
        $(
            impl $crate::Versioned for $msg {
                const SCHEMA: $crate::SchemaVersion = $version;
                const KIND: $crate::MessageKind = $crate::MessageKind::$kind;
            }
        )+
    };
}

// Position based access to the four optional wheels of a wheel set.
macro_rules! wheel_set {
    ($set:ty, $wheel:ty) => {
        impl $set {
            pub fn get(&self, position: $crate::WheelPosition) -> Option<&$wheel> {
                match position {
                    $crate::WheelPosition::FrontLeft => self.wheel_front_left.as_ref(),
                    $crate::WheelPosition::FrontRight => self.wheel_front_right.as_ref(),
                    $crate::WheelPosition::RearLeft => self.wheel_rear_left.as_ref(),
                    $crate::WheelPosition::RearRight => self.wheel_rear_right.as_ref(),
                }
            }

            pub fn get_mut(&mut self, position: $crate::WheelPosition) -> Option<&mut $wheel> {
                self.slot(position).as_mut()
            }

            pub fn get_or_insert(&mut self, position: $crate::WheelPosition) -> &mut $wheel {
                self.slot(position).get_or_insert_with(Default::default)
            }

            /// Present wheels, front left to rear right.
            pub fn iter(&self) -> impl Iterator<Item = ($crate::WheelPosition, &$wheel)> + '_ {
                $crate::WheelPosition::ALL
                    .into_iter()
                    .filter_map(move |p| self.get(p).map(|w| (p, w)))
            }

            fn slot(&mut self, position: $crate::WheelPosition) -> &mut Option<$wheel> {
                match position {
                    $crate::WheelPosition::FrontLeft => &mut self.wheel_front_left,
                    $crate::WheelPosition::FrontRight => &mut self.wheel_front_right,
                    $crate::WheelPosition::RearLeft => &mut self.wheel_rear_left,
                    $crate::WheelPosition::RearRight => &mut self.wheel_rear_right,
                }
            }
        }
    };
}
