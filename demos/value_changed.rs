use csevents::{EventArgs, EventHandler, Handlers, NoArgsEventHandler};
use std::any::Any;

struct TemperatureChanged {
    celsius: f32,
}

impl EventArgs for TemperatureChanged {}

struct Thermometer {
    name: String,
    pub on_change: EventHandler<'static, TemperatureChanged>,
    pub on_shutdown: NoArgsEventHandler<'static>,
}

impl Thermometer {
    fn new(name: impl Into<String>) -> Self {
        Thermometer {
            name: name.into(),
            on_change: EventHandler::new(),
            on_shutdown: NoArgsEventHandler::new(),
        }
    }

    fn read(&self, celsius: f32) {
        self.on_change.invoke(self, &TemperatureChanged { celsius });
    }

    fn shutdown(&self) {
        self.on_shutdown.invoke(self);
    }
}

fn name_of(sender: &dyn Any) -> &str {
    sender
        .downcast_ref::<Thermometer>()
        .map(|t| t.name.as_str())
        .unwrap_or("unknown")
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut thermometer = Thermometer::new("kitchen");
    thermometer.on_change += |sender: &dyn Any, args: &TemperatureChanged| {
        println!("{}: {:.1}°C", name_of(sender), args.celsius);
    };
    let alarm = thermometer.on_change.add(|sender, args| {
        if args.celsius > 30.0 {
            println!("{}: too hot!", name_of(sender));
        }
    });
    thermometer.on_shutdown += |sender: &dyn Any| println!("{}: shutting down", name_of(sender));

    thermometer.read(21.5);
    thermometer.read(31.0);

    thermometer.on_change -= alarm;
    thermometer.read(35.0);

    println!("{} change handler(s) left", thermometer.on_change.len());
    thermometer.shutdown();
}
