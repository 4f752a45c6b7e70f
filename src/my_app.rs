use std::path::PathBuf;
use std::result;

use chrono::Local;
use fltk::{
    app::{self, Receiver},
    button, dialog,
    enums::{Align, FrameType, Shortcut},
    frame,
    group::{self, PackType},
    input, menu,
    prelude::*,
    window,
};

use crate::filter::{self, FilterKind};
use crate::img::RasterImage;
use crate::my_err::MyError;
use crate::pipeline;
use crate::small_dlg::{confirm, err_msg, info_msg};

pub const WIN_WIDTH: i32 = 820;
pub const WIN_HEIGHT: i32 = 560;

const PADDING: i32 = 3;
const BTN_HEIGHT: i32 = 30;
const BTN_TEXT_PADDING: i32 = 10;
const MENU_BTN_ARROW_W: i32 = 30;
const IMG_PADDING: i32 = 10;

// the filtered images are tiny next to the window, so they are blown up
// by a fixed factor for the comparison row
const OUTPUT_SCALE: i32 = 4;

#[derive(Debug, Copy, Clone)]
pub enum Message {
    LoadImage,
    SelectFilter(FilterKind),
    Apply,
}

pub fn create_app() -> result::Result<(), MyError> {
    let app = app::App::default();
    let mut wind = window::Window::default()
        .with_size(WIN_WIDTH, WIN_HEIGHT)
        .center_screen()
        .with_label("Свёртка 3x3");
    wind.end();
    wind.make_resizable(true);
    wind.show();

    let mut conv_wind = ConvolutionWindow::new(&mut wind, 0, 0, WIN_WIDTH, WIN_HEIGHT);

    conv_wind.run(app)?;

    Ok(())
}

pub struct ConvolutionWindow<'wind> {
    parent_window: &'wind mut window::Window,
    receiver: Receiver<Message>,
    source_path: Option<PathBuf>,
    selected_filter: FilterKind,
    // graphical parts
    lbl_filter: frame::Frame,
    inp_amount: input::IntInput,
    frame_source: frame::Frame,
    outputs_pack: group::Pack,
    output_frames: Vec<frame::Frame>,
    lbl_status: frame::Frame,
}

impl<'wind> ConvolutionWindow<'wind> {
    pub fn new(wind_parent: &'wind mut window::Window, x: i32, y: i32, w: i32, h: i32) -> Self {
        wind_parent.begin();

        let (sender, receiver) = app::channel::<Message>();

        let mut main_pack = group::Pack::default()
            .with_pos(x, y)
            .with_size(w, h);
        main_pack.set_type(PackType::Vertical);
        main_pack.set_spacing(PADDING);

        let mut btns_row = group::Pack::default().with_size(w, BTN_HEIGHT);
        btns_row.set_type(PackType::Horizontal);
        btns_row.set_spacing(PADDING);

        let mut btn_load = button::Button::default().with_label("Загрузить...");
        {
            let (bw, bh) = btn_load.measure_label();
            btn_load.set_size(bw + BTN_TEXT_PADDING, bh + BTN_TEXT_PADDING);
        }
        btn_load.emit(sender, Message::LoadImage);

        let mut btn_filter = menu::MenuButton::default();
        btn_filter.set_label("Фильтр");
        {
            let (bw, bh) = btn_filter.measure_label();
            btn_filter.set_size(bw + BTN_TEXT_PADDING + MENU_BTN_ARROW_W, bh + BTN_TEXT_PADDING);
        }
        for def in filter::all_filters() {
            btn_filter.add_emit(def.name(), Shortcut::None, menu::MenuFlag::Normal, sender,
                Message::SelectFilter(def.kind()));
        }

        let lbl_filter = frame::Frame::default()
            .with_size(150, BTN_HEIGHT)
            .with_label(filter::all_filters()[0].name());

        let mut lbl_amount = frame::Frame::default().with_label("Повторений:");
        {
            let (lw, lh) = lbl_amount.measure_label();
            lbl_amount.set_size(lw + BTN_TEXT_PADDING, lh + BTN_TEXT_PADDING);
        }

        let mut inp_amount = input::IntInput::default().with_size(50, BTN_HEIGHT);
        inp_amount.set_value("1");

        let mut btn_apply = button::Button::default().with_label("Применить и сохранить");
        {
            let (bw, bh) = btn_apply.measure_label();
            btn_apply.set_size(bw + BTN_TEXT_PADDING, bh + BTN_TEXT_PADDING);
        }
        btn_apply.emit(sender, Message::Apply);

        btns_row.end();

        let imgs_h = (h - BTN_HEIGHT * 2 - PADDING * 3) / 2;

        let mut frame_source = frame::Frame::default().with_size(w, imgs_h);
        frame_source.set_frame(FrameType::EmbossedFrame);
        frame_source.set_align(Align::Center);

        let scroll_area = group::Scroll::default().with_size(w, imgs_h);

        let mut outputs_pack = group::Pack::default().with_size(w, imgs_h - PADDING);
        outputs_pack.set_type(PackType::Horizontal);
        outputs_pack.set_spacing(PADDING);
        outputs_pack.end();

        scroll_area.end();

        let lbl_status = frame::Frame::default()
            .with_size(w, BTN_HEIGHT)
            .with_label("Изображение не загружено");

        main_pack.end();

        wind_parent.end();

        ConvolutionWindow {
            parent_window: wind_parent,
            receiver,
            source_path: None,
            selected_filter: FilterKind::None,
            // graphical parts
            lbl_filter,
            inp_amount,
            frame_source,
            outputs_pack,
            output_frames: Vec::<frame::Frame>::new(),
            lbl_status,
        }
    }

    pub fn run(&mut self, app: app::App) -> result::Result<(), MyError> {
        while app.wait() {
            if let Some(msg) = self.receiver.recv() {
                match msg {
                    Message::LoadImage => {
                        match self.try_load() {
                            Ok(_) => {}
                            Err(err) => err_msg(self.parent_window, &err.get_message())
                        };
                        self.parent_window.redraw();
                    },
                    Message::SelectFilter(kind) => {
                        self.selected_filter = kind;
                        self.lbl_filter.set_label(filter::get_filter_by_kind(kind).name());
                        self.parent_window.redraw();
                    },
                    Message::Apply => {
                        match self.try_apply() {
                            Ok(count) => info_msg(self.parent_window, &format!("Сохранено файлов: {}", count)),
                            Err(err) => err_msg(self.parent_window, &err.get_message())
                        };
                        self.parent_window.redraw();
                    },
                };
            }
        }

        Ok(())
    }

    fn try_load(&mut self) -> result::Result<(), MyError> {
        if !self.output_frames.is_empty() {
            if confirm(self.parent_window, "При загрузке нового изображения прежние результаты будут убраны. Продолжить?") {
                self.clear_outputs();
            } else {
                return Ok(());
            }
        }

        let mut dlg = dialog::FileDialog::new(dialog::FileDialogType::BrowseFile);
        dlg.set_filter("*.{jpg,jpeg,png,bmp,gif}");
        dlg.show();
        let path_buf = dlg.filename();

        match path_buf.to_str() {
            Some(p) => if p.is_empty() { return Ok(()); }
            _ => {}
        }

        let img = RasterImage::load(path_buf.clone())?;

        let mut drawable = img.get_drawable_copy()?;
        drawable.scale(self.frame_source.w() - IMG_PADDING, self.frame_source.h() - IMG_PADDING, true, true);
        self.frame_source.set_image(Some(drawable));
        self.frame_source.redraw();

        self.lbl_status.set_label(&format!("Изображение {}x{} загружено", img.w(), img.h()));

        self.source_path = Some(path_buf);

        Ok(())
    }

    fn try_apply(&mut self) -> result::Result<usize, MyError> {
        let source_path = match self.source_path {
            Some(ref p) => p.clone(),
            None => return Err(MyError::new("Необходимо загрузить изображение для обработки".to_string()))
        };

        let amount = match self.inp_amount.value().parse::<usize>() {
            Ok(a) if a >= 1 => a,
            _ => return Err(MyError::new("Количество повторений должно быть целым числом не меньше 1".to_string()))
        };

        let selection = filter::get_filter_by_kind(self.selected_filter);

        let outputs = pipeline::run(&source_path, selection, amount)?;

        self.show_outputs(&outputs)?;

        self.lbl_status.set_label(&format!("Готово: {}", Local::now().format("%H:%M:%S")));

        Ok(outputs.len())
    }

    fn show_outputs(&mut self, outputs: &[pipeline::FilterOutput]) -> result::Result<(), MyError> {
        self.clear_outputs();

        self.outputs_pack.begin();

        for output in outputs.iter() {
            let out_w = output.image.w() as i32 * OUTPUT_SCALE;
            let out_h = output.image.h() as i32 * OUTPUT_SCALE;

            let mut fr = frame::Frame::default()
                .with_size(out_w + IMG_PADDING, self.outputs_pack.h());
            fr.set_frame(FrameType::EmbossedBox);
            fr.set_align(Align::Inside | Align::Bottom);
            fr.set_label(output.filter.name());

            let mut drawable = output.image.get_drawable_copy()?;
            drawable.scale(out_w, out_h, true, true);
            fr.set_image(Some(drawable));

            self.output_frames.push(fr);
        }

        self.outputs_pack.end();

        Ok(())
    }

    fn clear_outputs(&mut self) {
        for fr in self.output_frames.iter() {
            self.outputs_pack.remove(fr);
        }
        self.output_frames.clear();

        self.outputs_pack.redraw();
    }
}
